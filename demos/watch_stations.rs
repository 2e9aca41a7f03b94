use windbird::{Dashboard, DashboardConfig, DashboardPhase, StationClient, WindbirdError};

#[tokio::main]
async fn main() -> Result<(), WindbirdError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let client = StationClient::builder().build()?;
    let handle = Dashboard::new(client, DashboardConfig::default()).spawn();
    let mut updates = handle.subscribe();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                if let DashboardPhase::Error(message) = &state.phase {
                    println!("Refresh failed: {}", message);
                    continue;
                }

                let summary = &state.snapshot.summary;
                if summary.is_empty() {
                    println!("No stations reporting");
                    continue;
                }
                println!(
                    "Average wind {:.1} km/h | gust {:.1} km/h ({}) | dominant {} | {} of {} active | {:.1} hPa",
                    summary.avg_speed_kmh,
                    summary.max_gust_kmh,
                    summary.max_gust_station.as_deref().unwrap_or("-"),
                    summary.dominant_direction.map_or("-", |bucket| bucket.label()),
                    summary.active_stations,
                    summary.total_stations,
                    summary.avg_pressure_hpa,
                );
                for marker in state.snapshot.markers() {
                    println!(
                        "  #{:<5} {:<30} {:>5.1} km/h {:<3} {:<20} {}",
                        marker.id,
                        marker.name,
                        marker.wind_speed_kmh,
                        marker.direction,
                        marker.descriptor,
                        marker.status,
                    );
                }
            }
        }
    }

    handle.shutdown().await;
    Ok(())
}
