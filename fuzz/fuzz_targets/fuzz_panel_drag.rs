#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quire_layout::{AnchorRect, PanelLayoutController, PanelResizeAxis, PointerPosition};

#[derive(Debug, Arbitrary)]
enum Axis {
    Left,
    Right,
    Vertical,
}

impl From<Axis> for PanelResizeAxis {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Left => Self::HorizontalLeft,
            Axis::Right => Self::HorizontalRight,
            Axis::Vertical => Self::Vertical,
        }
    }
}

#[derive(Debug, Arbitrary)]
enum Op {
    Begin {
        axis: Axis,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    },
    Update {
        x: f64,
        y: f64,
    },
    End,
    Cancel,
    Toggle,
    Nudge {
        axis: Axis,
        steps: i32,
    },
}

fuzz_target!(|ops: Vec<Op>| {
    let mut controller = PanelLayoutController::default();
    let config = *controller.config();

    for op in ops.into_iter().take(512) {
        match op {
            Op::Begin {
                axis,
                left,
                top,
                width,
                height,
            } => {
                controller.begin_drag(axis.into(), AnchorRect::new(left, top, width, height));
            }
            Op::Update { x, y } => {
                controller.update_drag(PointerPosition::new(x, y));
            }
            Op::End => {
                controller.end_drag();
            }
            Op::Cancel => {
                controller.force_cancel();
            }
            Op::Toggle => {
                controller.toggle_right_panel_collapsed();
            }
            Op::Nudge { axis, steps } => {
                controller.nudge(axis.into(), steps);
            }
        }

        // Post-conditions that must always hold:
        let state = controller.state();
        assert!(state.left >= config.left_min && state.left <= config.left_max);
        assert!(state.center >= config.center_min, "center below minimum");
        assert!(
            state.right_panel_width_px >= config.right_width_min_px
                && state.right_panel_width_px <= config.right_width_max_px
        );
        assert!(
            state.vertical_split >= config.vertical_split_min
                && state.vertical_split <= config.vertical_split_max
        );
        assert!((state.left + state.center + state.right - 100.0).abs() < 1e-9);
    }
});
