//! Graphics support via embedded-graphics
//!
//! [`FrameBuffer`] and [`Display`] both implement
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) with
//! `Rgb888` color. Drawing only touches the frame buffer; call
//! [`Display::display`] to push it to the panel.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::Rgb888,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # use hx8357::{Builder, Dimensions, Display, Interface, Rgb};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let interface = Interface::new(MockSpi, MockPin, MockPin);
//! # let dims = match Dimensions::new(320, 480) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let mut display = match Display::new(interface, config, vec![Rgb::BLACK; dims.pixel_count()]) {
//! #     Ok(display) => display,
//! #     Err(_) => return,
//! # };
//! # let mut delay = MockDelay;
//! # let _ = display.begin(&mut delay);
//! let _ = display.clear(Rgb888::BLACK);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb888::RED))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb888::YELLOW, 2))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, HX8357!",
//!     Point::new(10, 100),
//!     MonoTextStyle::new(&FONT_6X10, Rgb888::WHITE),
//! )
//! .draw(&mut display);
//!
//! // Push the frame to the panel
//! let _ = display.display();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Point, Size},
    pixelcolor::Rgb888,
    primitives::Rectangle,
};

use crate::color::Rgb;
use crate::display::Display;
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;

impl<B> DrawTarget for FrameBuffer<B>
where
    B: AsRef<[Rgb]> + AsMut<[Rgb]>,
{
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let width = i32::from(self.width());
        let height = i32::from(self.height());

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= width || y >= height {
                continue;
            }
            self.set_pixel(x as u16, y as u16, color.into());
        }

        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }
        // Clipped to the buffer, so both corners are non-negative and fit u16
        self.fill_rect(
            area.top_left.x as u16,
            area.top_left.y as u16,
            area.size.width as u16,
            area.size.height as u16,
            color.into(),
        );
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into());
        Ok(())
    }
}

impl<B> OriginDimensions for FrameBuffer<B>
where
    B: AsRef<[Rgb]>,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl<I, B> DrawTarget for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[Rgb]> + AsMut<[Rgb]>,
{
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.frame_buffer_mut().draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.frame_buffer_mut().fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.frame_buffer_mut().fill(color.into());
        Ok(())
    }
}

impl<I, B> OriginDimensions for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[Rgb]> + AsMut<[Rgb]>,
{
    fn size(&self) -> Size {
        self.frame_buffer().size()
    }
}
