use clap::Parser;
use stockbro::application::strategy_plan::{PlanParameters, RiskTolerance};
use stockbro::cli::commands::{Cli, Commands};
use stockbro::config::Settings;
use stockbro::domain::entities::strategy::Strategy;
use stockbro::domain::values::comparison_request::ComparisonRequest;
use stockbro::domain::values::news_category::NewsCategory;
use stockbro::domain::values::symbol::Symbol;
use stockbro::domain::values::timeframe::Timeframe;
use stockbro::logging::init_logging;
use stockbro::StockBro;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = init_logging(&settings.log_level) {
        eprintln!("Error initializing logging: {e}");
    }

    let sb = match StockBro::new(&settings) {
        Ok(sb) => sb,
        Err(e) => {
            eprintln!("Error initializing StockBro: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(sb, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(sb: StockBro, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Lookup { symbol, timeframe } => {
            let symbol = Symbol::parse(&symbol)?;
            let tf: Timeframe = timeframe.parse()?;
            let data = sb.stock_data(&symbol, tf).await?;
            print_json(&data)?;
        }
        Commands::Predict { symbol, timeframe } => {
            let symbol = Symbol::parse(&symbol)?;
            let tf: Timeframe = timeframe.parse()?;
            let analysis = sb.analyze(&symbol, tf).await?;
            print_json(&analysis)?;
        }
        Commands::Plan {
            symbols,
            timeframe,
            risk,
            account_size,
            max_position_pct,
        } => {
            let tickers = ComparisonRequest::parse(&symbols)?;
            let params = PlanParameters {
                timeframe: timeframe.parse()?,
                risk_tolerance: risk.parse::<RiskTolerance>()?,
                account_size,
                max_position_pct,
            };
            let plan = sb.strategy_plan(&tickers, &params).await?;
            print_json(&plan)?;
        }
        Commands::Trending => {
            print_json(&sb.trending().await)?;
        }
        Commands::News {
            query,
            category,
            limit,
        } => {
            let query = match category {
                Some(c) => Some(c.parse::<NewsCategory>()?.query()),
                None => query,
            };
            let mut items = sb.news(query.as_deref()).await;
            items.truncate(limit);
            print_json(&items)?;
        }
        Commands::Summarize { url } => {
            let summary = sb.summarize_article(&url).await?;
            print_json(&summary)?;
        }
        Commands::Compare { symbols } => {
            let request = ComparisonRequest::parse(&symbols)?;
            print_json(&sb.compare(&request).await)?;
        }
        Commands::WatchAdd { symbol } => {
            let symbol = Symbol::parse(&symbol)?;
            if sb.watch_add(&symbol)? {
                println!("Added {symbol} to watchlist");
            } else {
                println!("{symbol} is already in your watchlist");
            }
        }
        Commands::WatchRemove { symbol } => {
            let symbol = Symbol::parse(&symbol)?;
            if sb.watch_remove(&symbol)? {
                println!("Removed {symbol} from watchlist");
            } else {
                println!("{symbol} is not in your watchlist");
            }
        }
        Commands::Watchlist { live } => {
            if live {
                print_json(&sb.watchlist_snapshot().await?)?;
            } else {
                print_json(&sb.watchlist()?)?;
            }
        }
        Commands::PortfolioAdd {
            symbol,
            quantity,
            purchase_price,
        } => {
            let symbol = Symbol::parse(&symbol)?;
            let item = sb.portfolio_add(&symbol, quantity, purchase_price)?;
            print_json(&item)?;
        }
        Commands::PortfolioUpdate {
            symbol,
            quantity,
            purchase_price,
        } => {
            let symbol = Symbol::parse(&symbol)?;
            let item = sb.portfolio_update(&symbol, quantity, purchase_price)?;
            print_json(&item)?;
        }
        Commands::PortfolioRemove { symbol } => {
            let symbol = Symbol::parse(&symbol)?;
            if sb.portfolio_remove(&symbol)? {
                println!("Removed {symbol} from portfolio");
            } else {
                println!("{symbol} is not in your portfolio");
            }
        }
        Commands::Portfolio { live } => {
            if live {
                print_json(&sb.portfolio_snapshot().await?)?;
            } else {
                print_json(&sb.portfolio()?)?;
            }
        }
        Commands::StrategyAdd { title, description } => {
            let strategy = sb.strategy_add(title, description)?;
            print_json(&strategy)?;
        }
        Commands::StrategyUpdate {
            id,
            title,
            description,
        } => {
            sb.strategy_update(Strategy {
                id: id.clone(),
                title,
                description,
            })?;
            println!("Strategy {id} updated");
        }
        Commands::StrategyRemove { id } => {
            if sb.strategy_remove(&id)? {
                println!("Strategy {id} removed");
            } else {
                println!("No strategy with id {id}");
            }
        }
        Commands::Strategies => {
            print_json(&sb.strategies()?)?;
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
