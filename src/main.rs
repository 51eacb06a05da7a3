use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sdl2::event::Event;
use tracing::info;

mod camera;
mod collision;
mod constants;
mod geometry;
mod input;
mod renderer;
mod simulation;
mod vehicle;
mod world;

use camera::FollowCamera;
use constants::{FRAME_DURATION, FPS, WINDOW_SIZE};
use input::{InputAction, InputHandler};
use renderer::Renderer;
use simulation::Simulation;
use world::World;

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "city_drive=info".into()),
        )
        .init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("City Drive", WINDOW_SIZE, WINDOW_SIZE)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;

    let mut rng = StdRng::from_entropy();
    let world = World::city(&mut rng);
    info!(obstacles = world.obstacles().len(), "city built");

    let mut simulation = Simulation::new(world);
    let mut input_handler = InputHandler::new();
    let mut camera = FollowCamera::new();
    let renderer = Renderer::new();
    let mut event_pump = sdl_context.event_pump()?;

    input::print_controls();

    let mut running = true;
    let mut last_frame = Instant::now();
    let mut frame_count = 0u64;

    while running {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        frame_count += 1;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => running = false,
                _ => match input_handler.process_event(&event) {
                    InputAction::Restart => simulation.reset(),
                    InputAction::Exit => running = false,
                    InputAction::None => {}
                },
            }
        }

        let frame = simulation.tick(input_handler.state(), dt);
        camera.update(frame.camera_focus, dt.min(constants::MAX_DT));
        renderer.render(&mut canvas, &simulation, &frame, camera.position)?;

        if frame_count % (FPS as u64 * 5) == 0 {
            let car = simulation.vehicle();
            println!(
                "📊 Speed: {} km/h | Distance: {} m | pos=({:.0}, {:.0})",
                frame.speed_kmh, frame.distance_m, car.position.x, car.position.z
            );
        }

        let frame_time = now.elapsed();
        if frame_time < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - frame_time);
        }
    }

    println!(
        "\n🏁 Final distance: {} m",
        simulation.distance().floor() as u64
    );
    Ok(())
}
