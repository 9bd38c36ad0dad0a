//! One animation frame: tick, draw, report a failed draw

use game_core::{Engine, Renderer};

use crate::diag::console_warn;

/// Advance and draw one frame
///
/// A failed draw has already been replaced by the fallback path; the
/// warning is sent to the browser console and returned.
pub fn run_frame<R: Renderer>(engine: &mut Engine, renderer: &mut R) -> Option<String> {
    let Err(e) = engine.frame(renderer) else {
        return None;
    };
    let message = format!(
        "Render failed at tick {}, drew fallback: {e:?}",
        engine.snapshot().tick
    );
    console_warn!("{message}");
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Snapshot;

    #[derive(Default)]
    struct FlakyRenderer {
        fail: bool,
        fallbacks: u32,
    }

    impl Renderer for FlakyRenderer {
        type Error = &'static str;

        fn draw(&mut self, _frame: &Snapshot) -> Result<(), Self::Error> {
            if self.fail {
                Err("arc failed")
            } else {
                Ok(())
            }
        }

        fn draw_fallback(&mut self, _frame: &Snapshot) {
            self.fallbacks += 1;
        }
    }

    #[test]
    fn test_failed_draw_is_reported() {
        let mut engine = Engine::new(4);
        engine.start();
        let mut renderer = FlakyRenderer {
            fail: true,
            ..Default::default()
        };

        let warning = run_frame(&mut engine, &mut renderer).expect("warning reported");

        assert!(warning.contains("arc failed"), "{warning}");
        assert!(warning.contains("tick 1"), "{warning}");
        assert_eq!(renderer.fallbacks, 1);
        assert_eq!(engine.snapshot().tick, 1, "Simulation still advanced");
    }

    #[test]
    fn test_successful_draw_reports_nothing() {
        let mut engine = Engine::new(4);
        engine.start();
        let mut renderer = FlakyRenderer::default();

        assert_eq!(run_frame(&mut engine, &mut renderer), None);
        assert_eq!(renderer.fallbacks, 0);
    }
}
