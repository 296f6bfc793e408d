// src/main.rs
use log::{error, info, warn};
use nannou::prelude::*;

use notchfill::{
    config::{Config, Settings},
    controllers::{OscCommand, OscController},
    views::Stage,
};

struct Model {
    stage: Stage,
    osc_controller: Option<OscController>,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config, falling back to defaults on any problem
    let config = Config::load().unwrap_or_else(|e| {
        error!("{}, using default config", e);
        Config::default()
    });
    let settings = Settings::from_config(&config).unwrap_or_else(|e| {
        error!("{}, using default settings", e);
        Settings::default()
    });

    app.new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .build()
        .expect("Failed to build window");

    // Viewport size is read once; the shape does not follow later resizes
    let window_rect = app.window_rect();
    let stage = Stage::new(window_rect.w(), window_rect.h(), settings);

    let osc_controller = if config.osc.enabled {
        match OscController::new(config.osc.rx_port) {
            Ok(controller) => {
                info!("Listening for OSC on port {}", config.osc.rx_port);
                Some(controller)
            }
            Err(e) => {
                warn!("OSC disabled, could not bind port {}: {}", config.osc.rx_port, e);
                None
            }
        }
    } else {
        None
    };

    Model {
        stage,
        osc_controller,
    }
}

fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.stage.pointer_down();
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => {
            model.stage.pointer_down();
        }
        Key::Q => app.quit(),
        _ => (),
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    if let Some(controller) = model.osc_controller.as_mut() {
        controller.process_messages();
        for command in controller.take_commands() {
            match command {
                OscCommand::Tap => {
                    model.stage.pointer_down();
                }
                OscCommand::Background { r, g, b } => model.stage.set_background(rgb(r, g, b)),
            }
        }
    }

    model.stage.update(update.since_last.as_secs_f32());
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model.stage.draw(&draw);

    if let Err(e) = draw.to_frame(app, &frame) {
        error!("Failed to render frame: {:?}", e);
    }
}
