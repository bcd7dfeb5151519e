mod common;

use std::path::PathBuf;

use anyhow::Context as _;
use http::Method;
use structopt::StructOpt;
use twitter_rest::api::{application, Request};
use twitter_rest::date::{DateFormat, TwitterDateTime};
use twitter_rest::{MediaFile, Segments, TwitterResponse};

#[derive(StructOpt)]
#[structopt(about = "Command line client of the Twitter REST API v1.1")]
struct Args {
    #[structopt(flatten)]
    opt: common::Opt,
    #[structopt(subcommand)]
    cmd: Cmd,
}

#[derive(StructOpt)]
enum Cmd {
    #[structopt(name = "get", about = "Send a GET request and print the response body")]
    Get(Call),
    #[structopt(name = "post", about = "Send a POST request and print the response body")]
    Post(Call),
    #[structopt(name = "rate-limit", about = "Show the rate limit status of the resources")]
    RateLimit {
        #[structopt(help = "Resource families, e.g. `statuses`")]
        resources: Vec<String>,
    },
    #[structopt(name = "date", about = "Parse a date string in any of the API's formats")]
    Date {
        #[structopt(help = "The date string")]
        input: String,
    },
}

#[derive(StructOpt)]
struct Call {
    #[structopt(help = "Endpoint path without `.json`, e.g. `statuses/show/{id}`")]
    path: String,
    #[structopt(help = "Parameters in the form of `key=value`")]
    params: Vec<String>,
    #[structopt(long = "media", help = "Files to upload")]
    media: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Args { opt, cmd } = Args::from_args();

    match cmd {
        Cmd::Get(call) => self::call(&opt, Method::GET, call).await,
        Cmd::Post(call) => self::call(&opt, Method::POST, call).await,
        Cmd::RateLimit { resources } => rate_limit(&opt, resources).await,
        Cmd::Date { input } => date(&input),
    }
}

async fn call(opt: &common::Opt, method: Method, call: Call) -> anyhow::Result<()> {
    let service = opt.service()?;

    let mut segments = Segments::default();
    for param in &call.params {
        let (key, value) = param
            .split_once('=')
            .with_context(|| format!("expected `key=value`, found `{}`", param))?;
        segments.push(format!("&{}=", key), value);
    }

    let media = call
        .media
        .iter()
        .map(|path| {
            MediaFile::open(path).with_context(|| format!("failed to read {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let files = if media.is_empty() { None } else { Some(&*media) };

    let res: TwitterResponse<json::Value> = service
        .request(method, &call.path, segments, files)
        .await?;

    println!("{}", res.body());
    check(&res)
}

async fn rate_limit(opt: &common::Opt, resources: Vec<String>) -> anyhow::Result<()> {
    let service = opt.service()?;

    let mut req = application::RateLimitStatus::new();
    if !resources.is_empty() {
        req.resources(resources);
    }
    let res = req.send(&service).await?;
    check(&res)?;

    let summary = res
        .content()
        .context("failed to parse the rate limit status")?;
    let mut rows: Vec<_> = summary
        .resources
        .values()
        .flat_map(|endpoints| endpoints.iter())
        .collect();
    rows.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (endpoint, limit) in rows {
        let reset = limit
            .reset_time()
            .map(|t| TwitterDateTime::format(t, DateFormat::RestApi))
            .unwrap_or_default();
        println!(
            "{}\t{}/{}\t{}",
            endpoint, limit.remaining, limit.limit, reset
        );
    }

    Ok(())
}

fn date(input: &str) -> anyhow::Result<()> {
    let date = TwitterDateTime::parse(input)
        .with_context(|| format!("`{}` is not in any known date format", input))?;

    println!("parsed as {:?}: {}", date.format, date.date_time.to_rfc3339());
    for &format in &DateFormat::ALL {
        println!(
            "{:?}\t{}",
            format,
            TwitterDateTime::format(date.date_time, format)
        );
    }

    Ok(())
}

fn check<T>(res: &TwitterResponse<T>) -> anyhow::Result<()> {
    let status = res.rate_limit_status();
    log::debug!(
        "rate limit: {}/{} (resets in {:?})",
        status.remaining,
        status.limit,
        status.reset_in()
    );

    if let Some(e) = res.error() {
        anyhow::bail!("{} {}: {}", res.request_method(), res.status(), e);
    }
    if !res.status().is_success() {
        anyhow::bail!("{} {}", res.request_method(), res.status());
    }

    Ok(())
}
