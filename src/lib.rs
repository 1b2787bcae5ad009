pub mod app;
mod commands;
pub mod domain;
pub mod error;
pub mod infra;

use infra::config::{load_config, resolve_db_path, ConfigStore};
use infra::init_db;
use std::path::PathBuf;
use tauri::Manager;

fn app_data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("com.tuinapp.app")
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            let data_dir = app
                .handle()
                .path()
                .app_data_dir()
                .unwrap_or_else(|_| app_data_dir());
            let config_path = data_dir.join("config.json");
            let config = load_config(&config_path);
            let db_path = resolve_db_path(&config, data_dir.join("tuinapp.db"));
            log::info!("DB path: {:?}", db_path);

            let pool = init_db(&db_path).map_err(|e| {
                log::error!("DB init failed: {}", e);
                e
            })?;
            app.manage(pool);
            app.manage(ConfigStore::new(config_path, db_path));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::plant::get_all_plants,
            commands::plant::create_plant,
            commands::plant::update_plant,
            commands::plant::delete_plant,
            commands::plant::get_plants_to_reorder,
            commands::activity::get_all_activities,
            commands::activity::create_activity,
            commands::activity::update_activity,
            commands::activity::delete_activity,
            commands::calendar::get_month_data,
            commands::photo::get_photos,
            commands::photo::add_photo,
            commands::photo::delete_photo,
            commands::data_transfer::import_plants_tsv,
            commands::storage::get_database_path,
            commands::storage::save_database_path,
            commands::storage::move_database,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
