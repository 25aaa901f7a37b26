use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use neutrino::cluster::master::discovery::master_service;
use neutrino::cluster::structs::master::Master;
use neutrino::cluster::structs::worker::Worker;
use neutrino::common::common::setup_logging;
use neutrino::common::structs::custom_error::CustomError;
use neutrino::config::enums::cluster_mode::ClusterMode;
use neutrino::config::structs::configuration::Configuration;
use neutrino::mvc::structs::logic_set::LogicSet;
use neutrino::sessions::structs::session_manager::SessionManager;
use neutrino::ssl::structs::certificate_bundle::CertificateBundle;
use neutrino::storage::storage::connect;
use neutrino::structs::Cli;
use neutrino::viewhub::server::viewhub_service;
use neutrino::viewhub::structs::view_hub::ViewHub;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_path(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    if let Some(mode) = args.mode {
        config.cluster_mode = mode;
    }
    let config = Arc::new(config);

    if setup_logging(&config).is_err() {
        exit(102);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let result = match config.cluster_mode {
                ClusterMode::master => run_master(config.clone()).await,
                ClusterMode::worker => run_worker(config.clone()).await,
            };
            if let Err(error) = result {
                sentry::capture_error(&error);
                error!("{}", error);
                exit(1);
            }
            Ok(())
        })
}

async fn run_master(config: Arc<Configuration>) -> Result<(), CustomError>
{
    let shutdown = Shutdown::new().map_err(|e| CustomError::new(&format!("{:?}", e)))?;

    let master = Master::new(config.clone()).map_err(|e| CustomError::new(&e.to_string()))?;
    let (bus_address, bus) = master.start().await.map_err(|e| CustomError::new(&e.to_string()))?;
    info!("[BOOT] Event bus listening on {}", bus_address);

    let address: SocketAddr = config.master.http_bind_address.parse()
        .map_err(|_| CustomError::new("master.http_bind_address is not a socket address"))?;
    let (handle, _, server) = master_service(address, master.clone())
        .map_err(|e| CustomError::new(&e.to_string()))?;
    tokio::spawn(server);

    let mut events = master.subscribe_events();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            info!("[MASTER] {:?}", event);
        }
    });

    shutdown.handle().await;
    info!("Shutdown request received, shutting down...");
    handle.stop(true).await;
    bus.abort();
    Ok(())
}

async fn run_worker(config: Arc<Configuration>) -> Result<(), CustomError>
{
    let shutdown = Shutdown::new().map_err(|e| CustomError::new(&format!("{:?}", e)))?;

    let storage = connect(&config.database).await.map_err(|e| CustomError::new(&e.to_string()))?;
    info!("[BOOT] Storage backend: {}", storage.backend_name());

    let sessions = SessionManager::open(storage.as_ref(), &config.sessions).await
        .map_err(|e| CustomError::new(&e.to_string()))?;
    let expiry = sessions.start_expiry_task(Duration::from_secs(config.sessions.check_expired_interval));

    let (hub, hub_requests) = ViewHub::new(sessions, Duration::from_secs(config.mvc.request_timeout));
    let (worker, cluster_messages) = Worker::new(config.clone()).map_err(|e| CustomError::new(&e.to_string()))?;
    let logic = LogicSet::new(config.clone(), storage, hub.clone(), Some(worker.clone()));
    let loops = logic.start(hub_requests, Some(cluster_messages));

    let tls_config = match config.worker.secure {
        true => {
            let bundle = CertificateBundle::load_from_files(&config.worker.ssl_cert, &config.worker.ssl_key)
                .map_err(|e| CustomError::new(&e.to_string()))?;
            Some(bundle.server_config().map_err(|e| CustomError::new(&e.to_string()))?)
        }
        false => None,
    };
    let address: SocketAddr = config.worker.bind_address.parse()
        .map_err(|_| CustomError::new("worker.bind_address is not a socket address"))?;
    let (handle, _, server) = viewhub_service(address, hub, tls_config)
        .map_err(|e| CustomError::new(&e.to_string()))?;
    tokio::spawn(server);

    info!("[BOOT] Worker {} connecting to {}", worker.id, config.event_bus.address());
    let mut link = worker.start();

    let result = tokio::select! {
        _ = shutdown.handle() => {
            info!("Shutdown request received, shutting down...");
            link.abort();
            Ok(())
        }
        joined = &mut link => match joined {
            Ok(Err(e)) => Err(CustomError::new(&e.to_string())),
            Ok(Ok(())) => Ok(()),
            Err(e) => {
                warn!("[WORKER] Event bus task ended: {}", e);
                Ok(())
            }
        }
    };

    handle.stop(true).await;
    expiry.abort();
    for task in loops {
        task.abort();
    }
    result
}
