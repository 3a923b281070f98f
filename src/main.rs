use anyhow::Result;
use beautiful_travel_planner::app::App;
use beautiful_travel_planner::models::Itinerary;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "beautiful-travel-planner")]
#[command(about = "Generate Korean-language European travel itineraries")]
struct CliArgs {
    /// Free-text travel query, e.g. "파리 3일".
    #[arg(value_name = "QUERY")]
    query: String,

    /// Print the raw itinerary JSON instead of the formatted view.
    #[arg(long)]
    json: bool,
}

fn format_itinerary(itinerary: &Itinerary) -> String {
    let mut out = format!("🎈 {}\n", itinerary.title);

    for day in &itinerary.days {
        out.push_str(&format!("\n{}일차: {}\n", day.day, day.activity));
        out.push_str(&format!("  {}\n", day.description));
    }

    if !itinerary.tips.is_empty() {
        out.push_str("\n🎒 여행 작가의 팁\n");
        for tip in &itinerary.tips {
            out.push_str(&format!("  • {}\n", tip));
        }
    }

    out
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beautiful_travel_planner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    match app.plan(&args.query).await {
        Ok(itinerary) => {
            info!("Generation completed successfully");
            if args.json {
                println!("{}", serde_json::to_string_pretty(&itinerary)?);
            } else {
                print!("{}", format_itinerary(&itinerary));
            }
            Ok(())
        }
        Err(e) => {
            // Diagnostics go to the log; the user sees the friendly retry line.
            error!("Failed to generate itinerary: {}", e);
            eprintln!("꿈의 조각을 모으는 데 잠시 문제가 생겼어요. 다시 시도해볼까요?");
            std::process::exit(1);
        }
    }
}
