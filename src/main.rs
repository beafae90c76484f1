use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use lineq::common::common::setup_logging;
use lineq::config::structs::configuration::Configuration;
use lineq::haproxy::haproxy::{write_haproxy_config, HAPROXY_CONFIG_FILE};
use lineq::peer::peer::{connect_remote_peers, peer_service};
use lineq::stats::structs::stats_atomics::StatsAtomics;
use lineq::store::structs::no_presentation::NoPresentation;
use lineq::store::structs::registry::Registry;
use lineq::store::traits::presentation_sink::PresentationSink;
use lineq::structs::Cli;
use lineq::web::structs::broadcaster::Broadcaster;
use lineq::web::structs::web_service_data::WebServiceData;
use lineq::web::web::web_service;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(args.create_config, &args.config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    if let Some(mode) = args.mode {
        config.peer.mode = mode;
    }
    if let Err(error) = config.validate() {
        eprintln!("[ERROR] {error}");
        exit(102);
    }
    let config = Arc::new(config);

    if let Err(error) = setup_logging(&config) {
        eprintln!("[ERROR] {error}");
        exit(103);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.haproxy_config {
        if let Err(error) = write_haproxy_config(&config, HAPROXY_CONFIG_FILE) {
            error!("[BOOT] {error}");
            exit(104);
        }
        return Ok(());
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to install the shutdown handler");
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let stats = Arc::new(StatsAtomics::new());
            let broadcaster = Arc::new(Broadcaster::new(stats.clone()));
            let presentation: Arc<dyn PresentationSink> = match config.web.enabled {
                true => broadcaster.clone(),
                false => Arc::new(NoPresentation),
            };
            let registry = Arc::new(Registry::new(config.clone(), presentation, stats));

            if config.peer.mode.is_waiting_room() {
                registry.bootstrap_rooms();
                info!("[BOOT] Starting thread for session expiry with {} seconds delay...", config.vwr.clean_interval);
                tokio::spawn(registry.clone().sweep_sessions_loop(tokio_shutdown.clone()));
            }

            let mut web_futures = Vec::new();
            if config.web.enabled {
                let address: SocketAddr = match config.web.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[WEB] Invalid bind address {}: {}", config.web.bind_address, error);
                        exit(1);
                    }
                };
                let data = Arc::new(WebServiceData {
                    registry: registry.clone(),
                    broadcaster: broadcaster.clone(),
                });
                web_futures.push(web_service(address, data)?);
            }
            if !web_futures.is_empty() {
                let (handles, futures): (Vec<_>, Vec<_>) = web_futures.into_iter().unzip();
                tokio::spawn(async move {
                    let _ = try_join_all(futures).await;
                    drop(handles);
                });
            }

            let peer_address: SocketAddr = match config.peer.bind_address.parse() {
                Ok(address) => address,
                Err(error) => {
                    error!("[PEER] Invalid bind address {}: {}", config.peer.bind_address, error);
                    exit(1);
                }
            };
            let peer_listener = peer_service(peer_address, registry.clone(), tokio_shutdown.clone()).await?;
            if !config.peer.remote_peers.is_empty() {
                tokio::spawn(connect_remote_peers(registry.clone()));
            }

            let stats_handler = tokio_shutdown.clone();
            let registry_spawn_stats = registry.clone();
            let console_interval = config.log_console_interval.max(1);
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = registry_spawn_stats.get_stats();
                            info!(
                                "[STATS] Peers: {} (active {}) - Failed handshakes: {} | Definitions: {} - Updates: {} - Acks: Sent:{} Recv:{} - Decode errors: {}",
                                stats.peers_connected, stats.peers_active, stats.handshakes_failed,
                                stats.table_definitions, stats.entry_updates,
                                stats.update_acks_sent, stats.update_acks_received, stats.decode_errors
                            );
                            if registry_spawn_stats.config.peer.mode.is_waiting_room() {
                                info!(
                                    "[STATS VWR] Admitted: {} - Queued: {} - Expired: {} - Promoted: {} - Sessions: {}",
                                    stats.sessions_admitted, stats.sessions_queued, stats.sessions_expired,
                                    stats.sessions_promoted, registry_spawn_stats.sessions.len()
                                );
                            }
                            if registry_spawn_stats.config.web.enabled {
                                info!(
                                    "[STATS WEB] Clients: {} - Sent: {} - Dropped: {}",
                                    stats.web_clients, stats.web_messages_sent, stats.web_messages_dropped
                                );
                            }
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");

                    tokio_shutdown.handle().await;
                    if let Err(error) = peer_listener.await {
                        error!("Errors happened on shutting down the peer listener: {error}");
                    }
                    tokio::time::sleep(Duration::from_secs(1)).await;

                    info!("Server shutting down completed");
                    Ok(())
                }
            }
        })
}
