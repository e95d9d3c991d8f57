use iced::widget::{button, column, container, image as image_widget, row, scrollable, text};
use iced::{Element, Length, Size, Task};
use image::RgbImage;

use super::{resize_to_fit, DisplaySurface};
use crate::config::DisplayConfig;
use crate::error::{Result, ShapeError};

#[derive(Clone)]
struct Frame {
    title: String,
    handle: image_widget::Handle,
    width: u32,
    height: u32,
}

/// Interactive surface: queued frames are shown side by side in one window
/// until the user presses Close or closes the window.
pub struct WindowSurface {
    config: DisplayConfig,
    frames: Vec<Frame>,
}

impl WindowSurface {
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            config,
            frames: Vec::new(),
        }
    }
}

impl DisplaySurface for WindowSurface {
    fn open(&mut self) -> Result<()> {
        self.frames.clear();
        Ok(())
    }

    fn show(&mut self, title: &str, image: &RgbImage) -> Result<()> {
        let fitted = resize_to_fit(image, &self.config);
        let (width, height) = fitted.dimensions();
        let rgba = image::DynamicImage::ImageRgb8(fitted).into_rgba8().into_raw();
        self.frames.push(Frame {
            title: title.to_string(),
            handle: image_widget::Handle::from_rgba(width, height, rgba),
            width,
            height,
        });
        Ok(())
    }

    fn wait_for_dismissal(&mut self) -> Result<()> {
        if self.frames.is_empty() {
            return Ok(());
        }

        let frames = self.frames.clone();
        let width: u32 = frames.iter().map(|f| f.width + 16).sum::<u32>() + 32;
        let height: u32 = frames.iter().map(|f| f.height).max().unwrap_or(0) + 120;

        iced::application(move || Viewer { frames: frames.clone() }, update, view)
            .title("shapescan")
            .window_size(Size::new(width as f32, height as f32))
            .run()
            .map_err(|e| ShapeError::Display(e.to_string()))
    }

    fn close(&mut self) {
        self.frames.clear();
    }
}

struct Viewer {
    frames: Vec<Frame>,
}

#[derive(Debug, Clone)]
enum Message {
    Dismiss,
}

fn update(_viewer: &mut Viewer, message: Message) -> Task<Message> {
    match message {
        Message::Dismiss => iced::exit(),
    }
}

fn view(viewer: &Viewer) -> Element<'_, Message> {
    let images = viewer.frames.iter().fold(row![].spacing(16), |row, frame| {
        row.push(
            column![
                text(frame.title.clone()).size(16),
                image_widget(frame.handle.clone()),
            ]
            .spacing(8),
        )
    });

    let content = column![
        scrollable(images),
        button("Close").on_press(Message::Dismiss),
    ]
    .spacing(16)
    .padding(16);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
