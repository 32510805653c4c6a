use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use algosolver::api::{configure_routes, AppState};
use algosolver::banner;
use algosolver::config::AppConfig;
use algosolver::display::{self, render_outcome};
use algosolver::models::{HttpMethod, Language, Platform, RequestParams};
use algosolver::runner::Solver;

#[derive(Parser)]
#[command(name = "algosolver")]
#[command(version)]
#[command(about = "Fetch solutions to coding problems from a solver service", long_about = None)]
struct Cli {
    /// Configuration file (default: <config dir>/algosolver/config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration as TOML
    Config,

    /// Start the HTTP service
    Serve {
        /// Address to bind (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides configuration)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Request a solution for one problem
    Solve {
        /// Problem identifier, e.g. two-sum or 1234/A
        slug: String,

        /// Judge the problem belongs to
        #[arg(short, long, default_value = "leetcode")]
        platform: Platform,

        /// Language of the solution
        #[arg(short, long, default_value = "python")]
        language: Language,

        /// Solver endpoint URL (overrides configuration)
        #[arg(long)]
        url: Option<String>,

        /// HTTP method used to reach the endpoint (GET or POST)
        #[arg(long)]
        method: Option<HttpMethod>,

        /// Use simulated data instead of the endpoint
        #[arg(long, conflicts_with = "live")]
        mock: bool,

        /// Call the endpoint even if mock mode is configured
        #[arg(long)]
        live: bool,

        /// Print the raw outcome as JSON
        #[arg(long, conflicts_with = "code_only")]
        json: bool,

        /// Print only the solution source, without metadata or framing
        #[arg(long)]
        code_only: bool,

        /// Also write the source to this file (a directory gets solution.<ext>)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    let mut app_config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    match cli.command {
        Commands::Config => {
            let rendered = app_config.to_toml().map_err(std::io::Error::other)?;
            print!("{}", rendered);
            Ok(())
        }
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                app_config.server.host = host;
            }
            if let Some(port) = port {
                app_config.server.port = port;
            }
            serve(app_config).await
        }
        Commands::Solve {
            slug,
            platform,
            language,
            url,
            method,
            mock,
            live,
            json,
            code_only,
            output,
        } => {
            let endpoint = &mut app_config.endpoint;
            if let Some(url) = url {
                endpoint.url = url;
            }
            if let Some(method) = method {
                endpoint.method = method;
            }
            if mock {
                endpoint.use_mock = true;
            } else if live {
                endpoint.use_mock = false;
            }

            let solver = Solver::from_config(&app_config);
            let params = RequestParams::new(slug, platform, language);
            let outcome = solver.submit(&params, &app_config.endpoint).await;

            if json {
                let rendered = serde_json::to_string_pretty(&outcome)?;
                println!("{}", rendered);
            } else if let (true, Some(solution)) = (code_only, outcome.solution()) {
                print!("{}", display::code_only(solution));
            } else {
                print!("{}", render_outcome(&outcome, &params, app_config.endpoint.use_mock));
            }

            if let (Some(path), Some(solution)) = (output, outcome.solution()) {
                if let Err(e) = display::save_code(solution, &params, &path) {
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            }

            if !outcome.is_success() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

async fn serve(app_config: AppConfig) -> std::io::Result<()> {
    banner::print_banner();

    let state = AppState::new(&app_config);
    let endpoint = state.endpoint_snapshot().await;
    let (host, port) = (app_config.server.host.clone(), app_config.server.port);

    println!("🚀 Starting server...");
    println!("📡 Solver endpoint: {} {} (mock: {})", endpoint.method, endpoint.url, endpoint.use_mock);
    println!("📊 API available at http://{}:{}/api/v1", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(actix_web::web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
