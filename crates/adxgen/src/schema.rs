//! Fixed report schema.
//!
//! The column set mirrors an Ad Exchange historical report export, including
//! its original mixed-language header labels. The labels are static data,
//! written verbatim as the header record — they are never derived from Rust
//! field names.

use serde::Serialize;

/// Number of columns in the report.
pub const COLUMNS: usize = 18;

/// Header labels, in column order, preserved verbatim from the source report.
pub const HEADERS: [&str; COLUMNS] = [
    "网站",
    "国家/地区",
    "广告资源格式",
    "广告单元（所有级别）",
    "广告客户（已分类）",
    "广告客户网域",
    "设备",
    "浏览器",
    "日期",
    "Ad Exchange 请求总数",
    "Ad Exchange 展示次数",
    "Ad Exchange 点击次数",
    "Ad Exchange 点击率",
    "Ad Exchange 平均 eCPM",
    "Ad Exchange 收入",
    "Ad Exchange Active View可见展示次数",
    "Ad Exchange Active View可见展示次数百分比",
    "Ad Exchange Active View可衡量展示次数",
];

/// Site vocabulary.
pub const SITES: [&str; 5] = [
    "example.com",
    "test-site.org",
    "demo.net",
    "sample.io",
    "fake-site.com",
];

/// Country vocabulary.
pub const COUNTRIES: [&str; 10] = [
    "美国", "中国", "日本", "韩国", "英国", "德国", "法国", "加拿大", "澳大利亚", "巴西",
];

/// Ad format vocabulary.
pub const AD_FORMATS: [&str; 5] = ["横幅广告", "插页式广告", "视频广告", "原生广告", "激励广告"];

/// Device vocabulary.
pub const DEVICES: [&str; 3] = ["移动设备", "桌面设备", "平板电脑"];

/// Browser vocabulary.
pub const BROWSERS: [&str; 5] = ["Chrome", "Safari", "Firefox", "Edge", "Opera"];

/// Advertiser domain vocabulary.
pub const ADVERTISER_DOMAINS: [&str; 3] = ["google.com", "facebook.com", "amazon.com"];

/// One synthetic report row.
///
/// Field order matches [`HEADERS`]; serialization relies on that order, so
/// new columns must be appended in both places together.
///
/// Invariants (enforced at draw time, not checked here):
/// `clicks <= impressions <= requests`,
/// `viewable_impressions <= impressions`,
/// `measurable_impressions <= impressions`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Row {
    /// Site, one of [`SITES`].
    pub site: &'static str,
    /// Country, one of [`COUNTRIES`].
    pub country: &'static str,
    /// Ad format, one of [`AD_FORMATS`].
    pub ad_format: &'static str,
    /// `"Ad Unit N"` for N in `1..=100`.
    pub ad_unit: String,
    /// `"Advertiser N"` for N in `1..=50`.
    pub advertiser: String,
    /// Advertiser domain, one of [`ADVERTISER_DOMAINS`].
    pub advertiser_domain: &'static str,
    /// Device, one of [`DEVICES`].
    pub device: &'static str,
    /// Browser, one of [`BROWSERS`].
    pub browser: &'static str,
    /// `YYYY-MM-DD`, within the sampler's 30-day window.
    pub date: String,
    /// Ad requests, `1000..=100_000`.
    pub requests: u32,
    /// Impressions, `100..=requests`.
    pub impressions: u32,
    /// Clicks, `0..=impressions / 100`.
    pub clicks: u32,
    /// Click-through rate in percent, rounded to 4 decimals.
    pub ctr: f64,
    /// Average eCPM, `0.1..=50.0`, rounded to 4 decimals.
    pub ecpm: f64,
    /// `(impressions / 1000) * ecpm`, rounded to 4 decimals.
    pub revenue: f64,
    /// Active View viewable impressions, `round(0.7 * impressions)..=impressions`.
    pub viewable_impressions: u32,
    /// Viewability in percent, rounded to 4 decimals.
    pub viewability_rate: f64,
    /// Active View measurable impressions, `round(0.8 * impressions)..=impressions`.
    pub measurable_impressions: u32,
}
