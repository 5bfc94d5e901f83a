//! Ragdoll 2D - physics debug-view demo
//!
//! Opens a window, steps a ragdoll simulation at a fixed rate and draws the
//! physics world's debug view. Arrow keys drive the torso.

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use ragdoll2d::config::AppConfig;
use ragdoll2d::input::{InputAction, InputMapper};
use ragdoll2d::scene::Scene;
use ragdoll2d::systems::{FrameLimiter, RenderError, RenderSystem, SimulationSystem, WindowSystem};
use ragdoll_input::BodyController;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
    /// Physics world plus handles to the walls and ragdoll
    scene: Scene,
    simulation: SimulationSystem,
    controller: BodyController,
    limiter: FrameLimiter,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let scene = Scene::demo(&config.simulation.to_physics_config());
        let controller = BodyController::new().with_speed(config.input.control_speed);
        let limiter = FrameLimiter::new(config.simulation.fps);

        Self {
            config,
            window: None,
            renderer: None,
            scene,
            simulation: SimulationSystem::new(),
            controller,
            limiter,
        }
    }

    /// Throw away the current world and build a fresh one
    fn reset_scene(&mut self) {
        self.scene = Scene::demo(&self.config.simulation.to_physics_config());
        self.simulation.reset();
        log::info!("Scene reset");
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ResetScene => self.reset_scene(),
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::TogglePause => {
                let paused = self.simulation.toggle_pause();
                log::info!("Simulation {}", if paused { "paused" } else { "resumed" });
                if let Some(window) = &self.window {
                    window.update_title(paused);
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if !self.limiter.should_render(now) {
            return;
        }

        self.simulation.update(&mut self.scene, &self.controller);

        if let Some(renderer) = &mut self.renderer {
            match renderer.render_frame(&self.scene.physics) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => renderer.reconfigure(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                }
                Err(e) => log::warn!("Skipped frame: {}", e),
            }
        }

        self.limiter.mark_rendered(now);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        match RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            &self.config.camera,
            self.config.window.vsync,
        ) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                log::error!("Failed to initialise renderer: {}", e);
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
        self.limiter = FrameLimiter::new(self.config.simulation.fps);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::Focused(false) => {
                self.controller.release_all();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if event.repeat {
                        return;
                    }
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                        return;
                    }
                    self.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            if self.limiter.should_render(Instant::now()) {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.limiter.next_deadline()));
    }
}

fn main() {
    // Config is read before logging starts so its log level can apply
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting Ragdoll 2D");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
