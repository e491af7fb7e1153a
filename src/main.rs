use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bevy::prelude::*;
use clap::Parser;

use golflick::core::config::{ConfigLoadReport, DEFAULT_CONFIG_PATH, LOCAL_CONFIG_PATH};
use golflick::{EmbeddedSprites, GameConfig, GamePlugin};

#[derive(Parser, Debug)]
#[command(author, version, about = "Four balls, three walls and a ground under gravity", long_about = None)]
struct Args {
    /// Extra RON config layer applied on top of assets/config/game.ron and game.local.ron.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut layers = vec![PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from(LOCAL_CONFIG_PATH)];
    layers.extend(args.config);
    let (cfg, used, errors) = GameConfig::load_layered(&layers);

    // Any undecodable image is fatal before a window is ever opened.
    let sprites = EmbeddedSprites::decode().context("loading embedded images")?;

    let size = cfg.window.layout();
    let exit = App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (size.x as f32, size.y as f32).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(cfg)
        .insert_resource(ConfigLoadReport { used, errors })
        .insert_resource(sprites)
        .add_plugins(GamePlugin)
        .run();

    if let AppExit::Error(code) = exit {
        bail!("app exited with error code {code}");
    }
    Ok(())
}
