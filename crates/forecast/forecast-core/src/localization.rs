//! Text catalogs for anomaly descriptions and recommendation cards.

use forecast_api::Locale;
use forecast_spi::{Advice, AnomalyKind, Localizer};

/// Built-in catalog for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Localizer for Catalog {
    fn anomaly_description(&self, kind: AnomalyKind) -> String {
        match (self.locale, kind) {
            (Locale::Tr, AnomalyKind::UnexpectedTrendMovement) => {
                "Beklenen trend dışı hareket".to_string()
            }
            (Locale::En, AnomalyKind::UnexpectedTrendMovement) => {
                "Unexpected movement against the expected trend".to_string()
            }
        }
    }

    fn advice(&self, advice: &Advice) -> (String, String) {
        match self.locale {
            Locale::Tr => turkish(advice),
            Locale::En => english(advice),
        }
    }
}

fn turkish(advice: &Advice) -> (String, String) {
    match *advice {
        Advice::PositiveTrend { change } => (
            "Pozitif Trend".to_string(),
            format!(
                "Seçilen senaryoda dönem sonuna kadar {:.0} € tutarında iyileşme bekleniyor. \
                 Erken faturalandırma ve tahsilat hızlandırma aksiyonları trendi güçlendirebilir.",
                change
            ),
        ),
        Advice::NegativeTrendRisk { change } => (
            "Negatif Trend Riski".to_string(),
            format!(
                "Projeksiyon, dönem sonunda {:.0} € düşüşe işaret ediyor. \
                 Maliyet kalemlerini gözden geçirip gider erteleme senaryoları çalıştırın.",
                change.abs()
            ),
        ),
        Advice::RisingVolatility => (
            "Artan Dalgalanma".to_string(),
            "Nakit akışında normalden yüksek oynaklık tespit edildi. Kısa vadeli nakit \
             rezervini güçlendirmek ve vadeli sözleşmeleri gözden geçirmek önerilir."
                .to_string(),
        ),
        Advice::DownwardTrend => (
            "Trend Aşağı Yönlü".to_string(),
            "Geçmiş verilere göre net nakit akışında aşağı yönlü trend mevcut. Yeni gelir \
             kalemleri eklemek ve tahsilatları hızlandırmak kritik görünüyor."
                .to_string(),
        ),
        Advice::AnomalyAlarm { date, value } => (
            "Anomali Alarmı".to_string(),
            format!(
                "{} tarihinde {:.0} € tutarında olağan dışı hareket görüldü. \
                 Kaydın doğruluğunu ve ilgili faturaları kontrol edin.",
                date, value
            ),
        ),
        Advice::SensitiveDays => (
            "Hassas Günler".to_string(),
            "Son dönemde normal sapma sınırını aşan hareketler mevcut. Bu tarihler için \
             manuel doğrulama ve müşteri iletişimi önerilir."
                .to_string(),
        ),
        Advice::StableOutlook => (
            "İstikrarlı Görünüm".to_string(),
            "Mevcut veri seti ciddi bir risk sinyali üretmedi. Senaryoları takip etmeye ve \
             aylık planı güncel tutmaya devam edin."
                .to_string(),
        ),
    }
}

fn english(advice: &Advice) -> (String, String) {
    match *advice {
        Advice::PositiveTrend { change } => (
            "Positive Trend".to_string(),
            format!(
                "The selected scenario expects an improvement of {:.0} € by the end of the \
                 period. Earlier invoicing and faster collection can strengthen the trend.",
                change
            ),
        ),
        Advice::NegativeTrendRisk { change } => (
            "Negative Trend Risk".to_string(),
            format!(
                "The projection points to a decline of {:.0} € by the end of the period. \
                 Review cost items and run expense deferral scenarios.",
                change.abs()
            ),
        ),
        Advice::RisingVolatility => (
            "Rising Volatility".to_string(),
            "Cash flow is more volatile than usual. Strengthening the short-term cash \
             reserve and reviewing forward contracts is advised."
                .to_string(),
        ),
        Advice::DownwardTrend => (
            "Downward Trend".to_string(),
            "Historical data shows a downward trend in net cash flow. Adding revenue \
             streams and accelerating collections looks critical."
                .to_string(),
        ),
        Advice::AnomalyAlarm { date, value } => (
            "Anomaly Alarm".to_string(),
            format!(
                "An unusual movement of {:.0} € was seen on {}. Check the record and the \
                 related invoices.",
                value, date
            ),
        ),
        Advice::SensitiveDays => (
            "Sensitive Days".to_string(),
            "Recent movements exceeded the normal deviation band. Manual verification and \
             customer contact are advised for these dates."
                .to_string(),
        ),
        Advice::StableOutlook => (
            "Stable Outlook".to_string(),
            "The current data set produced no serious risk signal. Keep tracking the \
             scenarios and keep the monthly plan up to date."
                .to_string(),
        ),
    }
}
