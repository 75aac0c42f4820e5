use dioxus::prelude::*;

use crate::config::{clamp_period_days, MAX_PERIOD_DAYS, MIN_PERIOD_DAYS};

/// Window for dashboard stats and the recent-days list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    Fortnight,
    Month,
    Custom(u32),
}

impl Period {
    pub const PRESETS: [Period; 3] = [Period::Week, Period::Fortnight, Period::Month];

    pub fn from_days(days: u32) -> Period {
        match days {
            7 => Period::Week,
            14 => Period::Fortnight,
            30 => Period::Month,
            n => Period::Custom(clamp_period_days(n)),
        }
    }

    pub fn days(self) -> u32 {
        match self {
            Period::Week => 7,
            Period::Fortnight => 14,
            Period::Month => 30,
            Period::Custom(n) => n,
        }
    }

    /// `<option>` value.
    pub fn key(self) -> &'static str {
        match self {
            Period::Week => "7",
            Period::Fortnight => "14",
            Period::Month => "30",
            Period::Custom(_) => "custom",
        }
    }

    pub fn label(self) -> String {
        match self {
            Period::Week => "Last 7 days".to_string(),
            Period::Fortnight => "Last 14 days".to_string(),
            Period::Month => "Last 30 days".to_string(),
            Period::Custom(n) => format!("Last {n} days"),
        }
    }

    /// Parse a `<select>` change; switching to custom keeps the current
    /// day count.
    pub fn from_key(key: &str, current: Period) -> Period {
        match key {
            "custom" => Period::Custom(current.days()),
            other => other
                .parse::<u32>()
                .map(Period::from_days)
                .unwrap_or(current),
        }
    }
}

#[component]
pub fn PeriodSelector(period: Signal<Period>) -> Element {
    let current = *period.read();
    let days = current.days();
    let key = current.key();

    rsx! {
        div { class: "period-selector",
            select {
                "aria-label": "Select period",
                value: "{key}",
                onchange: move |evt: Event<FormData>| {
                    let next = Period::from_key(&evt.value(), *period.read());
                    period.set(next);
                },
                for p in Period::PRESETS {
                    option {
                        value: p.key(),
                        selected: current == p,
                        {p.label()}
                    }
                }
                option {
                    value: "custom",
                    selected: matches!(current, Period::Custom(_)),
                    "Custom"
                }
            }
            if matches!(current, Period::Custom(_)) {
                input {
                    r#type: "number",
                    class: "period-days",
                    "aria-label": "Number of days",
                    min: "{MIN_PERIOD_DAYS}",
                    max: "{MAX_PERIOD_DAYS}",
                    value: "{days}",
                    onchange: move |evt: Event<FormData>| {
                        if let Ok(n) = evt.value().trim().parse::<u32>() {
                            period.set(Period::Custom(clamp_period_days(n)));
                        }
                    },
                }
                span { class: "period-suffix", "days" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_days_presets() {
        assert_eq!(Period::from_days(7), Period::Week);
        assert_eq!(Period::from_days(14), Period::Fortnight);
        assert_eq!(Period::from_days(30), Period::Month);
        assert_eq!(Period::from_days(90), Period::Custom(90));
    }

    #[test]
    fn test_from_days_clamps_custom() {
        assert_eq!(Period::from_days(0), Period::Custom(1));
        assert_eq!(Period::from_days(1000), Period::Custom(365));
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Period::from_key("14", Period::Week), Period::Fortnight);
        assert_eq!(Period::from_key("custom", Period::Month), Period::Custom(30));
        assert_eq!(Period::from_key("bogus", Period::Month), Period::Month);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Period::Week.label(), "Last 7 days");
        assert_eq!(Period::Custom(45).label(), "Last 45 days");
    }
}
