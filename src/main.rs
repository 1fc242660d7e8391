//! CLI front end for the findoc pipeline.
//!
//! Usage:
//!   findoc ask <document> "<question>"
//!   findoc analyze <SYMBOL> [--period 1y] [--interval 1d] [--doc <file>]
//!                  [--model drift|persistence] [--out <file>]
//!   findoc analyze --csv <file> [--doc <file>] [--model drift|persistence]
//!                  [--out <file>]

use anyhow::{Context, Result, bail};
use reqwest::Client;
use std::env;
use std::fs;
use std::path::Path;
use tracing::info;

use findoc::anomaly::{AnomalyThresholds, detect};
use findoc::config::config::AppCfg;
use findoc::core::types::{Interval, Period, PriceSeries};
use findoc::forecast::{ForecastModel, forecast, growth_percent};
use findoc::prices::{PriceClient, YahooClient, clean_price_csv};
use findoc::qna::{RankerConfig, rank};
use findoc::report::ForecastArtifact;
use findoc::sentiment;
use findoc::strategy::decide;
use findoc::text::sentences::split_sentences;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = AppCfg::load("config.yml")?;
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("ask") => ask(&cfg, &args[1..]),
        Some("sentiment") => sentiment_report(&cfg, &args[1..]),
        Some("analyze") => analyze(&cfg, &args[1..]).await,
        _ => {
            eprintln!(
                "usage:\n  findoc ask <document> <question>\n  \
                 findoc sentiment <document>\n  \
                 findoc analyze <SYMBOL>|--csv <file> [--period 1y] [--interval 1d] \
                 [--doc <file>] [--model drift|persistence] [--out <file>]"
            );
            Ok(())
        }
    }
}

fn sentiment_report(cfg: &AppCfg, args: &[String]) -> Result<()> {
    let [doc_path] = args else {
        bail!("sentiment needs a document path");
    };

    let (text, name) = load_document(doc_path)?;
    println!("{name}: compound {:.3}", sentiment::compound(&text));

    let points = sentiment::rolling(&text, cfg.sentiment.window_sentences);
    if points.is_empty() {
        println!("Not enough sentences for a rolling view.");
        return Ok(());
    }
    for p in points {
        println!("window {:>3}: {:+.3}", p.index, p.compound);
    }
    Ok(())
}

fn load_document(path: &str) -> Result<(String, String)> {
    let bytes = fs::read(path).with_context(|| format!("reading {path}"))?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    Ok((text, name))
}

fn ask(cfg: &AppCfg, args: &[String]) -> Result<()> {
    let [doc_path, question] = args else {
        bail!("ask needs a document path and a question");
    };

    let (text, name) = load_document(doc_path)?;
    info!(document = %name, "answering question");

    let sentences = split_sentences(&text);
    let answers = rank(question, &sentences, cfg.qna.top_k, &RankerConfig::default());

    if answers.is_empty() {
        println!("No relevant passage found (document has no sentences).");
        return Ok(());
    }
    for answer in answers {
        println!("[{:.3}] {}", answer.score, answer.sentence);
    }
    Ok(())
}

struct AnalyzeArgs {
    symbol: Option<String>,
    csv_path: Option<String>,
    doc_path: Option<String>,
    period: Period,
    interval: Interval,
    model: ForecastModel,
    out: Option<String>,
}

fn parse_analyze_args(args: &[String]) -> Result<AnalyzeArgs> {
    let mut parsed = AnalyzeArgs {
        symbol: None,
        csv_path: None,
        doc_path: None,
        period: Period::OneYear,
        interval: Interval::Daily,
        model: ForecastModel::Drift,
        out: None,
    };

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        let mut flag_value = |name: &str| {
            it.next()
                .cloned()
                .with_context(|| format!("{name} needs a value"))
        };
        match arg.as_str() {
            "--csv" => parsed.csv_path = Some(flag_value("--csv")?),
            "--doc" => parsed.doc_path = Some(flag_value("--doc")?),
            "--out" => parsed.out = Some(flag_value("--out")?),
            "--period" => {
                let v = flag_value("--period")?;
                parsed.period =
                    Period::parse(&v).with_context(|| format!("unknown period {v}"))?;
            }
            "--interval" => {
                let v = flag_value("--interval")?;
                parsed.interval =
                    Interval::parse(&v).with_context(|| format!("unknown interval {v}"))?;
            }
            "--model" => {
                parsed.model = match flag_value("--model")?.as_str() {
                    "drift" => ForecastModel::Drift,
                    "persistence" => ForecastModel::Persistence,
                    other => bail!("unknown model {other}"),
                };
            }
            sym if !sym.starts_with("--") => parsed.symbol = Some(sym.to_string()),
            other => bail!("unknown flag {other}"),
        }
    }

    if parsed.symbol.is_none() && parsed.csv_path.is_none() {
        bail!("analyze needs a symbol or --csv <file>");
    }
    Ok(parsed)
}

async fn analyze(cfg: &AppCfg, args: &[String]) -> Result<()> {
    let parsed = parse_analyze_args(args)?;

    let (series, source, ticker, period): (PriceSeries, String, Option<String>, Option<Period>) =
        if let Some(path) = &parsed.csv_path {
            let file = fs::File::open(path).with_context(|| format!("opening {path}"))?;
            let series = clean_price_csv(file)?;
            (series, path.clone(), None, None)
        } else {
            let symbol = parsed.symbol.clone().expect("checked in arg parsing");
            let client = Client::builder()
                .user_agent(cfg.http.user_agent.clone())
                .pool_idle_timeout(cfg.http.pool_idle_timeout)
                .pool_max_idle_per_host(cfg.http.pool_max_idle_per_host)
                .timeout(cfg.http.timeout)
                .build()
                .context("building http client")?;
            let yahoo = YahooClient::new(cfg.yahoo.clone(), client);
            let series = yahoo
                .fetch_history(&symbol, parsed.period, parsed.interval)
                .await?;
            (
                series,
                "yahoo".to_string(),
                Some(symbol),
                Some(parsed.period),
            )
        };

    info!(rows = series.len(), %source, "price series normalized");

    let fc = forecast(&series, cfg.forecast.horizon_days, parsed.model)?;
    let change_pct = growth_percent(&series, &fc);

    let thresholds = AnomalyThresholds {
        mild: cfg.anomaly.mild_threshold,
        severe: cfg.anomaly.severe_threshold,
    };
    let (label, stats) = detect(&series, thresholds);

    let sentiment_compound = match &parsed.doc_path {
        Some(path) => {
            let (text, name) = load_document(path)?;
            info!(document = %name, "scoring document sentiment");
            sentiment::compound(&text)
        }
        None => 0.0,
    };

    let (decision, reasons) = decide(change_pct, sentiment_compound, label);

    let artifact = ForecastArtifact::new(
        &source,
        ticker.as_deref(),
        period,
        cfg.forecast.horizon_days,
        parsed.model,
        &series,
        &fc,
        change_pct,
        (label, &stats),
        sentiment_compound,
        decision,
        &reasons,
    );

    let json = serde_json::to_string_pretty(&artifact)?;
    match &parsed.out {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("writing {path}"))?;
            info!(%path, "artifact written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
