//! `culinary brands ...` commands

use anyhow::Result;
use culinary_core::{Brand, NavigationAction, Navigator};

use crate::state::AppState;

fn print_brand(brand: &Brand, active: bool) {
    let marker = if active { "*" } else { " " };
    let status = if brand.is_active { "" } else { " (inactive)" };
    println!("{} {:<24} {}{}", marker, brand.id, brand.name, status);
}

/// List the directory, marking the active brand
pub async fn list(state: &AppState, json: bool) -> Result<()> {
    let active = state.coordinator.initialize().await?;
    let brands = state.coordinator.brands().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&brands)?);
        return Ok(());
    }

    if brands.is_empty() {
        println!("No brands available");
    }
    let active_id = active.as_ref().map(|b| b.id.as_str());
    for brand in &brands {
        print_brand(brand, Some(brand.id.as_str()) == active_id);
    }
    Ok(())
}

/// Show the active brand and the persisted selection
pub async fn current(state: &AppState, json: bool) -> Result<()> {
    let active = state.coordinator.initialize().await?;
    let persisted = state.coordinator.selected_brand_id().await?;

    if json {
        let value = serde_json::json!({
            "active": active,
            "persisted": persisted,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match active {
        Some(brand) => print_brand(&brand, true),
        None => println!("No active brand"),
    }
    if let Some(id) = persisted {
        println!("  persisted: {}", id);
    }
    Ok(())
}

/// Switch the active brand, following the current route
pub async fn switch(state: &AppState, brand_id: &str, json: bool) -> Result<()> {
    state.coordinator.initialize().await?;
    let switched = state.coordinator.switch_brand(brand_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&switched)?);
        return Ok(());
    }

    match &switched.navigation {
        NavigationAction::Navigated(path) => println!("→ {}", path),
        NavigationAction::Refreshed => {
            println!("↻ {}", state.navigator.current_path().await)
        }
        NavigationAction::None => {}
    }
    Ok(())
}

/// Reload the directory once; on failure the caller decides whether to retry
pub async fn refresh(state: &AppState) -> Result<()> {
    match state.coordinator.refresh().await? {
        Some(brand) => print_brand(&brand, true),
        None => println!("No active brand"),
    }
    Ok(())
}

/// Remove the persisted selection
pub async fn forget(state: &AppState) -> Result<()> {
    if state.coordinator.forget_selection().await? {
        println!("Forgot the saved brand selection");
    } else {
        println!("No saved brand selection");
    }
    Ok(())
}
