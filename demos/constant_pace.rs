//! Headless demo: drive the default figure-eight animation for one second
//! and print the marker track.
//!
//! The in-memory surface and countdown scheduler stand in for the GUI layer
//! a real host would provide.

use std::time::Duration;

use curvepace::{AnimationConfig, Canvas, Point, Scheduler, Surface};

struct Dot {
    at: Point,
    canvas: Canvas,
}

impl Surface for Dot {
    fn position(&self) -> Point {
        self.at
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.at = Point::new(self.at.x + dx, self.at.y + dy);
    }

    fn canvas(&self) -> Canvas {
        self.canvas
    }
}

/// Grants a fixed number of ticks, then tells the driver to wind down.
struct Countdown {
    remaining: u32,
    pending: bool,
}

impl Scheduler for Countdown {
    fn request_tick(&mut self, _delay_ms: u64) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.pending = true;
        true
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let cfg = AnimationConfig::default();
    let canvas = Canvas {
        width: 1020,
        height: 632,
    };
    let mut dot = Dot {
        at: Point::new(f64::from(canvas.width) / 2.0, f64::from(canvas.height) / 2.0),
        canvas,
    };
    let mut timer = Countdown {
        remaining: 200,
        pending: false,
    };

    let mut driver = cfg.driver(canvas)?;
    driver.start(&mut dot, &mut timer)?;

    while timer.pending {
        timer.pending = false;
        std::thread::sleep(Duration::from_millis(cfg.tick_ms));
        driver.tick(&mut dot, &mut timer)?;
        let p = dot.position();
        println!("param {:8.4}  marker ({:7.2}, {:7.2})", driver.param(), p.x, p.y);
    }

    Ok(())
}
