use mug_config::MugConfig;
use mug_core::{
    bus::EventBus,
    event::Event,
    gesture::{Gesture, GestureMap},
    logging::ActivityLog,
    state::AppState,
};
use mug_expression::{ExpressionController, FaceSurface};
use mug_ui::face::FaceView;

/// Number of activity lines shown in the HUD.
const ACTIVITY_LINES: usize = 5;

pub struct App {
    pub state: AppState,
    pub bus: EventBus,
    pub gestures: GestureMap,
    pub controller: ExpressionController<FaceView>,
    activity: ActivityLog,
    config: MugConfig,
    redraw: bool,
}

impl App {
    pub fn new(config: MugConfig, activity: ActivityLog) -> Self {
        let view = FaceView::new(config.face.to_parameters());
        let controller = ExpressionController::new(view, config.expression);
        Self {
            state: AppState::new(),
            bus: EventBus::new(),
            gestures: GestureMap::new(config.pinch.step),
            controller,
            activity,
            config,
            redraw: true,
        }
    }

    /// Apply every pending event. Returns `true` when the app should quit.
    pub fn process_events(&mut self) -> bool {
        for event in self.bus.drain() {
            if self.handle(event) {
                return true;
            }
        }
        false
    }

    fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::Gesture(gesture) => return self.apply(gesture),
            Event::Resize { cols, rows } => {
                tracing::debug!(cols, rows, "terminal resized");
                self.redraw = true;
            }
            Event::Tick => self.redraw = true,
        }
        false
    }

    /// Apply one gesture. Returns `true` for [`Gesture::Quit`].
    pub fn apply(&mut self, gesture: Gesture) -> bool {
        let ctl = &mut self.controller;
        match gesture {
            Gesture::Pinch { factor } => {
                let limits = self.config.pinch.min_scale..=self.config.pinch.max_scale;
                ctl.pinch(factor, limits);
            }
            Gesture::SwipeUp => {
                if !ctl.increase_happiness() {
                    tracing::info!("already as happy as it gets");
                }
            }
            Gesture::SwipeDown => {
                if !ctl.decrease_happiness() {
                    tracing::info!("already as sad as it gets");
                }
            }
            Gesture::CycleEyes => {
                let eyes = ctl.expression().eyes.next();
                ctl.set_eyes(eyes);
            }
            Gesture::CycleBrows => {
                let brows = ctl.expression().eye_brows.next();
                ctl.set_eye_brows(brows);
            }
            Gesture::Reset => {
                ctl.set_expression(self.config.expression);
                ctl.surface_mut().set_scale(self.config.face.scale);
                tracing::info!("face reset");
            }
            Gesture::Quit => return true,
        }
        self.state.status_line = format!("{}", ctl.expression());
        false
    }

    /// Whether the next loop iteration must draw. Clears the pending flags.
    pub fn take_redraw(&mut self) -> bool {
        let surface = self.controller.surface_mut().take_needs_display();
        std::mem::take(&mut self.redraw) || surface
    }

    pub fn view(&self) -> &FaceView {
        self.controller.surface()
    }

    pub fn title(&self) -> String {
        format!("{:?}", self.controller.expression().mouth)
    }

    /// Current parameters for the HUD.
    pub fn param_lines(&self) -> Vec<String> {
        let expr = self.controller.expression();
        let p = self.view().params();
        vec![
            format!("eyes  {:?} ({})", expr.eyes, if p.eyes_open { "open" } else { "shut" }),
            format!("brows {:?} ({:+.2})", expr.eye_brows, p.eye_brow_tilt),
            format!("mouth {:?} ({:+.2})", expr.mouth, p.mouth_curvature),
            format!("scale {:.2}", p.scale),
            format!("up    {}", self.state.uptime_label()),
        ]
    }

    pub fn activity_lines(&self) -> Vec<mug_core::logging::ActivityEntry> {
        self.activity.recent(ACTIVITY_LINES)
    }
}
