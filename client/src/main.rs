//! `travel-cli`: drives the Travel Assistant workflows from a terminal.

use std::io::{self, Write};
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{WrapErr, eyre};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use travel_client::domain::{
    AttractionSearch, CreateOrderRequest, LoginRequest, OrderListParams, OrderStatus, PageParams,
    RegisterRequest, RestaurantSearch, TravelRequest,
};
use travel_client::session::LoggingNavigator;
use travel_client::{ClientSettings, TravelApp};

#[derive(Debug, Parser)]
#[command(
    name = "travel-cli",
    version,
    about = "Travel Assistant command-line client"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in and store the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and store the session.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the session.
    Logout,
    /// Show the signed-in account.
    Whoami {
        /// Re-fetch the profile from the backend.
        #[arg(long)]
        refresh: bool,
    },
    /// Submit a travel request read from a JSON file.
    Request {
        #[arg(long)]
        file: Utf8PathBuf,
    },
    /// List plans generated for a request.
    Plans { request_id: String },
    /// Choose a plan.
    SelectPlan { plan_id: String },
    /// Search attractions at a destination.
    Attractions {
        destination: String,
        #[arg(long)]
        keyword: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Search restaurants at a destination.
    Restaurants {
        destination: String,
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long)]
        cuisine: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Book a plan using an order read from a JSON file.
    Order {
        #[arg(long)]
        file: Utf8PathBuf,
    },
    /// List orders.
    Orders {
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Cancel an order.
    CancelOrder { order_id: String },
    /// Start payment for an order.
    PayOrder {
        order_id: String,
        payment_method: String,
    },
}

#[derive(Debug, Clone, Copy, clap::Args)]
struct PageArgs {
    #[arg(long)]
    page: Option<u32>,
    #[arg(long)]
    page_size: Option<u32>,
}

impl From<PageArgs> for PageParams {
    fn from(args: PageArgs) -> Self {
        Self {
            page: args.page,
            page_size: args.page_size,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusArg {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl From<StatusArg> for OrderStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => Self::Pending,
            StatusArg::Confirmed => Self::Confirmed,
            StatusArg::Cancelled => Self::Cancelled,
            StatusArg::Completed => Self::Completed,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let settings = ClientSettings::from_environment()?;
    let app = TravelApp::bootstrap(&settings, Arc::new(LoggingNavigator))?;
    run(cli.command, &app).await
}

async fn run(command: Command, app: &TravelApp) -> color_eyre::Result<()> {
    match command {
        Command::Login { email, password } => {
            let mut auth = app.auth();
            emit(auth.login(&LoginRequest { email, password }).await?)
        }
        Command::Register {
            name,
            email,
            password,
        } => {
            let mut auth = app.auth();
            emit(
                auth.register(&RegisterRequest {
                    name,
                    email,
                    password,
                })
                .await?,
            )
        }
        Command::Logout => {
            app.auth().logout().await?;
            emit(&serde_json::json!({ "signed_out": true }))
        }
        Command::Whoami { refresh } => {
            let mut auth = app.auth();
            if refresh {
                emit(auth.refresh_profile().await?)
            } else {
                emit(&auth.store().user())
            }
        }
        Command::Request { file } => {
            let request: TravelRequest = read_json(&file)?;
            emit(&app.travel().create_request(&request).await?)
        }
        Command::Plans { request_id } => {
            let mut travel = app.travel();
            emit(travel.load_plans(&request_id).await?)
        }
        Command::SelectPlan { plan_id } => emit(&app.travel().choose_plan(&plan_id).await?),
        Command::Attractions {
            destination,
            keyword,
            page,
        } => {
            let search = AttractionSearch {
                destination,
                keyword,
                page: page.into(),
            };
            emit(&app.catalogue().search_attractions(&search).await?)
        }
        Command::Restaurants {
            destination,
            keyword,
            cuisine,
            page,
        } => {
            let search = RestaurantSearch {
                destination,
                keyword,
                cuisine_type: cuisine,
                page: page.into(),
            };
            emit(&app.catalogue().search_restaurants(&search).await?)
        }
        Command::Order { file } => {
            let order: CreateOrderRequest = read_json(&file)?;
            emit(&app.orders().create_order(&order).await?)
        }
        Command::Orders { status, page } => {
            let params = OrderListParams {
                status: status.map(OrderStatus::from),
                page: page.into(),
            };
            emit(&app.orders().list_orders(&params).await?)
        }
        Command::CancelOrder { order_id } => emit(&app.orders().cancel_order(&order_id).await?),
        Command::PayOrder {
            order_id,
            payment_method,
        } => emit(&app.orders().pay_order(&order_id, &payment_method).await?),
    }
}

fn emit<T: Serialize + ?Sized>(value: &T) -> color_eyre::Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> color_eyre::Result<T> {
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("{path} does not name a file"))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .wrap_err_with(|| format!("opening {parent}"))?;
    let text = dir
        .read_to_string(file_name)
        .wrap_err_with(|| format!("reading {path}"))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("parsing {path}"))
}
