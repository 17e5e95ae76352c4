//! Per-row sampling.
//!
//! `RowSampler` owns a random source and the precomputed 30-day date window
//! and draws one independent `Row` per call. Every numeric range is clamped
//! at draw time, so a sampled row satisfies the schema invariants by
//! construction and no validation pass exists downstream.

use anyhow::{Context, Result};
use jiff::{Span, Zoned};
use rand::Rng;

use crate::schema::{Row, AD_FORMATS, ADVERTISER_DOMAINS, BROWSERS, COUNTRIES, DEVICES, SITES};

/// Length of the report date window, in days.
pub const DATE_WINDOW_DAYS: i64 = 30;

/// The `DATE_WINDOW_DAYS` consecutive civil dates starting at
/// `today - DATE_WINDOW_DAYS`, formatted `YYYY-MM-DD`.
///
/// The window ends the day before generation time, matching the report
/// exports this fixture imitates.
pub fn recent_dates() -> Result<Vec<String>> {
    let today = Zoned::now().date();
    let start = today
        .checked_sub(Span::new().days(DATE_WINDOW_DAYS))
        .context("compute date window start")?;

    let mut dates = Vec::with_capacity(DATE_WINDOW_DAYS as usize);
    for i in 0..DATE_WINDOW_DAYS {
        let day = start
            .checked_add(Span::new().days(i))
            .context("advance date window")?;
        dates.push(day.to_string());
    }
    Ok(dates)
}

/// Draws independent report rows from a random source.
#[derive(Debug)]
pub struct RowSampler<R: Rng> {
    rng: R,
    dates: Vec<String>,
}

impl<R: Rng> RowSampler<R> {
    /// Build a sampler over `rng` with a fresh wall-clock date window.
    ///
    /// Fails only if calendar arithmetic fails.
    pub fn new(rng: R) -> Result<Self> {
        Ok(Self {
            rng,
            dates: recent_dates()?,
        })
    }

    /// The date window rows are drawn from.
    #[must_use]
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// Draw one row.
    ///
    /// All draws are uniform; dependent ranges (impressions, clicks, Active
    /// View counts) are clamped against the values drawn before them.
    pub fn sample_row(&mut self) -> Row {
        let rng = &mut self.rng;

        let site = pick(rng, &SITES);
        let country = pick(rng, &COUNTRIES);
        let ad_format = pick(rng, &AD_FORMATS);
        let device = pick(rng, &DEVICES);
        let browser = pick(rng, &BROWSERS);
        let ad_unit = format!("Ad Unit {}", rng.random_range(1..=100));
        let advertiser = format!("Advertiser {}", rng.random_range(1..=50));
        let advertiser_domain = pick(rng, &ADVERTISER_DOMAINS);
        let date = self.dates[rng.random_range(0..self.dates.len())].clone();

        let requests: u32 = rng.random_range(1000..=100_000);
        let impressions: u32 = rng.random_range(100..=requests);
        let clicks: u32 = rng.random_range(0..=impressions / 100);
        let ctr = if impressions > 0 {
            round4(f64::from(clicks) / f64::from(impressions) * 100.0)
        } else {
            0.0
        };

        let ecpm = round4(rng.random_range(0.1..=50.0));
        let revenue = round4(f64::from(impressions) / 1000.0 * ecpm);

        let viewable_floor = (f64::from(impressions) * 0.7).round() as u32;
        let viewable_impressions = rng.random_range(viewable_floor..=impressions);
        let viewability_rate = if impressions > 0 {
            round4(f64::from(viewable_impressions) / f64::from(impressions) * 100.0)
        } else {
            0.0
        };

        let measurable_floor = (f64::from(impressions) * 0.8).round() as u32;
        let measurable_impressions = rng.random_range(measurable_floor..=impressions);

        Row {
            site,
            country,
            ad_format,
            ad_unit,
            advertiser,
            advertiser_domain,
            device,
            browser,
            date,
            requests,
            impressions,
            clicks,
            ctr,
            ecpm,
            revenue,
            viewable_impressions,
            viewability_rate,
            measurable_impressions,
        }
    }
}

/// Uniform pick from a static vocabulary.
fn pick<R: Rng>(rng: &mut R, vocab: &'static [&'static str]) -> &'static str {
    vocab[rng.random_range(0..vocab.len())]
}

/// Round to 4 decimal places.
fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
