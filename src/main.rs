// src/main.rs
use log::{error, warn};
use nannou::prelude::*;
use std::time::Instant;

use pentavis::{
    config::Config,
    controllers::{KeyAction, KeyboardController, OscController, SceneMode, SceneState, HELP_TEXT},
    draw::NannouTarget,
    models::Bounds,
    render::{FibonacciRenderer, TilingRenderer, TilingStyle},
};

struct Model {
    config: Config,
    scene: SceneState,

    // Input
    keyboard: KeyboardController,
    osc_controller: Option<OscController>,
    random: rand::rngs::ThreadRng,

    // Rendering
    tiling_renderer: TilingRenderer,
    fibonacci_renderer: FibonacciRenderer,

    // FPS
    last_update: Instant,
    fps: f32,

    // Overlays
    show_help: bool,
    debug_flag: bool,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = Config::load().unwrap_or_else(|e| {
        warn!("no usable config.toml ({e}), using defaults");
        Config::default()
    });

    let osc_controller = if config.osc.enabled {
        match OscController::new(config.osc.rx_port) {
            Ok(controller) => Some(controller),
            Err(e) => {
                error!("{e}, OSC control disabled");
                None
            }
        }
    } else {
        None
    };

    let window = app
        .new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .key_released(key_released)
        .build();
    if let Err(e) = window {
        error!("failed to open window: {e:?}");
        app.quit();
    }

    Model {
        scene: SceneState::from_config(&config),
        keyboard: KeyboardController::new(),
        osc_controller,
        random: rand::thread_rng(),
        tiling_renderer: TilingRenderer::new(TilingStyle::from_config(&config.style)),
        fibonacci_renderer: FibonacciRenderer::default(),
        last_update: Instant::now(),
        fps: 0.0,
        show_help: false,
        debug_flag: false,
        config,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    let shift = app.keys.mods.shift();
    match model.keyboard.key_pressed(key, shift) {
        Some(KeyAction::Command(command)) => {
            model.scene = model.scene.apply(&command, &mut model.random);
        }
        Some(KeyAction::ToggleHelp) => model.show_help = !model.show_help,
        Some(KeyAction::ToggleDebug) => model.debug_flag = !model.debug_flag,
        // held controls are read back as rates in update()
        Some(KeyAction::Hold(..)) | None => (),
    }
}

fn key_released(_app: &App, model: &mut Model, key: Key) {
    model.keyboard.key_released(key);
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32().max(f32::EPSILON);
    }

    // Process OSC messages
    if let Some(osc_controller) = model.osc_controller.as_mut() {
        osc_controller.process_messages();
        for command in osc_controller.take_commands() {
            model.scene = model.scene.apply(&command, &mut model.random);
        }
    }

    // Held keys
    let rates = model.keyboard.rates(model.scene.mode, &model.config.controls);
    model.scene = model.scene.advanced(&rates, duration.as_secs_f64());
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.tiling_renderer.style.background);

    let window = app.window_rect();
    let scene = &model.scene;
    let mut target = NannouTarget::new(&draw, scene.camera);

    let summary = match scene.mode {
        SceneMode::Penrose => {
            let viewport = scene.viewport(
                window.w() as f64,
                window.h() as f64,
                model.config.view.overscan,
            );
            match model.tiling_renderer.render(&scene.params, &viewport, &mut target) {
                Ok(stats) => format!(
                    "lines: {}  crossings: {}  rhombi: {}",
                    stats.visible_lines, stats.intersections, stats.rhombi
                ),
                Err(e) => {
                    warn!("render failed: {e}");
                    e.to_string()
                }
            }
        }
        SceneMode::Fibonacci => {
            let bounds = Bounds::centered(scene.fibonacci_extent);
            let strip = model
                .fibonacci_renderer
                .render(&scene.fibonacci_line, &bounds, &mut target);
            strip.word()
        }
    };

    if model.show_help {
        draw.text(HELP_TEXT)
            .x_y(window.left() + 180.0, window.top() - 140.0)
            .w_h(340.0, 280.0)
            .left_justify()
            .align_text_top()
            .font_size(14)
            .color(WHITE);
    }

    if model.debug_flag {
        let cursor = scene.camera.to_model(app.mouse.position());
        let text = format!(
            "FPS: {:.1}{}\ngamma: {:.3?}\ngamma sum: {:.4}{}\ncursor: ({:.2}, {:.2})\n{}",
            model.fps,
            if scene.paused { " (paused)" } else { "" },
            scene.params.gamma,
            scene.params.gamma_sum(),
            if scene.gamma_outside_lines() {
                "\ngamma outside line range, press Backspace"
            } else {
                ""
            },
            cursor.x,
            cursor.y,
            summary
        );
        draw.text(&text)
            .x_y(window.right() - 260.0, window.top() - 80.0)
            .w_h(500.0, 180.0)
            .right_justify()
            .align_text_top()
            .font_size(14)
            .color(RED);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        error!("failed to draw frame: {e:?}");
    }
}
