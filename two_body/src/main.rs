//! Earth-Moon Gravity Simulation
//!
//! Two bodies with real masses and radii, integrated with Newtonian gravity
//! and drawn as white circles on a black background. Every frame advances
//! the simulation by a fixed slice of simulated time and prints the elapsed
//! simulated days on a single, continuously rewritten line.
//!
//! Closing the window ends the simulation.

mod renderer;

use std::io::Write;
use std::process::ExitCode;

use common::GraphicsContext;
use renderer::Renderer;
use two_body::config::{CIRCLE_SEGMENTS, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use two_body::{CircleBatch, Simulation};
use winit::{
    event::{Event, WindowEvent},
    event_loop::ControlFlow,
};

const BODY_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Stopped,
}

struct App {
    ctx: GraphicsContext,
    renderer: Renderer,
    simulation: Simulation<BODY_COUNT>,
    batch: CircleBatch,
    state: LoopState,
}

impl App {
    fn new(ctx: GraphicsContext) -> Self {
        let max_vertices = BODY_COUNT * CircleBatch::vertices_per_circle(CIRCLE_SEGMENTS);
        let renderer = Renderer::new(&ctx, max_vertices);

        Self {
            ctx,
            renderer,
            simulation: Simulation::earth_moon(),
            batch: CircleBatch::with_capacity(BODY_COUNT, CIRCLE_SEGMENTS),
            state: LoopState::Running,
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    fn update(&mut self) {
        self.simulation.step(&mut self.batch);

        let mut stdout = std::io::stdout().lock();
        let printed = write!(stdout, "Simulation time: {:.2} days\r", self.simulation.elapsed_days())
            .and_then(|_| stdout.flush());
        if let Err(e) = printed {
            log::warn!("Failed to write simulation time: {}", e);
        }

        if log::log_enabled!(log::Level::Debug) {
            let momentum = self.simulation.bodies.total_momentum();
            let com = self.simulation.bodies.center_of_mass();
            log::debug!(
                "Frame {}: total momentum ({:.3e}, {:.3e}) kg*m/s, center of mass ({:.5}, {:.5})",
                self.simulation.frames(),
                momentum.x,
                momentum.y,
                com.x,
                com.y
            );
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let num_vertices = self.renderer.update_vertices(&self.ctx.queue, &self.batch);

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer
            .render(&mut encoder, &view, self.batch.clear_color(), num_vertices);

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn stop(&mut self) {
        if self.state == LoopState::Running {
            self.state = LoopState::Stopped;
            println!();
            log::info!(
                "Window closed after {} frames ({:.1} simulated days)",
                self.simulation.frames(),
                self.simulation.elapsed_days()
            );
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    println!("Starting physics simulation with real-world values");

    let (ctx, event_loop) = match pollster::block_on(GraphicsContext::new(
        WINDOW_TITLE,
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
    )) {
        Ok(started) => started,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new(ctx);

    let result = event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    app.stop();
                    elwt.exit();
                }
                WindowEvent::Resized(size) => app.resize(size),
                WindowEvent::RedrawRequested if app.state == LoopState::Running => {
                    app.update();
                    match app.render() {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Surface out of memory");
                            app.stop();
                            elwt.exit();
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                app.ctx.window.request_redraw();
            }
            Event::LoopExiting => {
                log::info!("Tearing down renderer");
            }
            _ => {}
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Event loop error: {}", e);
            ExitCode::FAILURE
        }
    }
}
