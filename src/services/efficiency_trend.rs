//! Tendencias de eficiencia (MPG)
//!
//! Hay dos cálculos independientes con ventana y umbral propios:
//!
//! * `fleet_efficiency_trend`: toda la flota, últimos 7 días, mitades por
//!   punto medio, umbral ±3%.
//! * `chart_efficiency_trend`: gráfica por vehículo, últimas 3 muestras
//!   contra las 3 anteriores, umbral ±5%.

use crate::models::analytics::EfficiencyTrend;

pub const FLEET_TREND_WINDOW_DAYS: i64 = 7;
pub const FLEET_TREND_MIN_SAMPLES: usize = 3;
pub const FLEET_TREND_THRESHOLD_PCT: f64 = 3.0;

pub const CHART_TREND_WINDOW: usize = 3;
pub const CHART_TREND_THRESHOLD_PCT: f64 = 5.0;

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn percent_difference(older: f64, newer: f64) -> f64 {
    (newer - older) / older * 100.0
}

// NaN cae en Stable por las comparaciones de punto flotante
fn classify(percent: f64, threshold: f64) -> EfficiencyTrend {
    if percent < -threshold {
        EfficiencyTrend::Down
    } else if percent > threshold {
        EfficiencyTrend::Up
    } else {
        EfficiencyTrend::Stable
    }
}

/// Tendencia de 7 días de la flota.
///
/// `samples` son los MPG de la ventana, en orden ascendente por fecha.
pub fn fleet_efficiency_trend(samples: &[f64]) -> EfficiencyTrend {
    if samples.len() < FLEET_TREND_MIN_SAMPLES {
        return EfficiencyTrend::Stable;
    }

    let half = samples.len() / 2;
    let (older, newer) = samples.split_at(half);

    classify(
        percent_difference(mean(older), mean(newer)),
        FLEET_TREND_THRESHOLD_PCT,
    )
}

/// Tendencia 3-vs-3 de la gráfica de un vehículo.
///
/// Sin muestras vuelve a Stable. Con menos de 3 muestras, o sin ninguna
/// muestra anterior a las 3 recientes, se conserva `previous`.
pub fn chart_efficiency_trend(samples: &[f64], previous: EfficiencyTrend) -> EfficiencyTrend {
    if samples.is_empty() {
        return EfficiencyTrend::Stable;
    }
    if samples.len() < CHART_TREND_WINDOW {
        return previous;
    }

    let recent_start = samples.len() - CHART_TREND_WINDOW;
    let older_start = recent_start.saturating_sub(CHART_TREND_WINDOW);

    let recent = &samples[recent_start..];
    let older = &samples[older_start..recent_start];

    if older.is_empty() {
        return previous;
    }

    classify(
        percent_difference(mean(older), mean(recent)),
        CHART_TREND_THRESHOLD_PCT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_trend_needs_three_samples() {
        assert_eq!(fleet_efficiency_trend(&[]), EfficiencyTrend::Stable);
        assert_eq!(fleet_efficiency_trend(&[5.0, 50.0]), EfficiencyTrend::Stable);
    }

    #[test]
    fn test_fleet_trend_up() {
        let samples = [10.0, 10.0, 10.0, 20.0, 20.0, 20.0];
        assert_eq!(fleet_efficiency_trend(&samples), EfficiencyTrend::Up);
    }

    #[test]
    fn test_fleet_trend_down() {
        let samples = [20.0, 20.0, 20.0, 10.0, 10.0, 10.0];
        assert_eq!(fleet_efficiency_trend(&samples), EfficiencyTrend::Down);
    }

    #[test]
    fn test_fleet_trend_small_change_is_stable() {
        let samples = [10.0, 10.0, 10.0, 10.2, 10.2, 10.2];
        assert_eq!(fleet_efficiency_trend(&samples), EfficiencyTrend::Stable);
    }

    #[test]
    fn test_fleet_trend_odd_count_puts_extra_sample_in_newer_half() {
        // older = [10], newer = [10, 11] -> +5%
        assert_eq!(fleet_efficiency_trend(&[10.0, 10.0, 11.0]), EfficiencyTrend::Up);
        // older = [10], newer = [10.5, 9.9] -> +2%
        assert_eq!(fleet_efficiency_trend(&[10.0, 10.5, 9.9]), EfficiencyTrend::Stable);
    }

    #[test]
    fn test_fleet_trend_zero_older_mean() {
        assert_eq!(fleet_efficiency_trend(&[0.0, 0.0, 0.0]), EfficiencyTrend::Stable);
        assert_eq!(fleet_efficiency_trend(&[0.0, 5.0, 5.0]), EfficiencyTrend::Up);
    }

    #[test]
    fn test_chart_trend_keeps_previous_without_older_window() {
        assert_eq!(
            chart_efficiency_trend(&[10.0, 12.0, 14.0], EfficiencyTrend::Down),
            EfficiencyTrend::Down
        );
        assert_eq!(
            chart_efficiency_trend(&[10.0, 12.0], EfficiencyTrend::Up),
            EfficiencyTrend::Up
        );
    }

    #[test]
    fn test_chart_trend_resets_without_samples() {
        assert_eq!(chart_efficiency_trend(&[], EfficiencyTrend::Up), EfficiencyTrend::Stable);
    }

    #[test]
    fn test_chart_trend_uses_five_percent_threshold() {
        // +4%: estable para la gráfica aunque superaría el ±3% de la flota
        let samples = [10.0, 10.0, 10.0, 10.4, 10.4, 10.4];
        assert_eq!(chart_efficiency_trend(&samples, EfficiencyTrend::Stable), EfficiencyTrend::Stable);
        assert_eq!(fleet_efficiency_trend(&samples), EfficiencyTrend::Up);

        let samples = [10.0, 10.0, 10.0, 9.0, 9.0, 9.0];
        assert_eq!(chart_efficiency_trend(&samples, EfficiencyTrend::Stable), EfficiencyTrend::Down);
    }

    #[test]
    fn test_chart_trend_only_looks_at_last_six() {
        // Las muestras viejas de 30 MPG quedan fuera de la ventana [-6:-3]
        let samples = [30.0, 30.0, 10.0, 10.0, 10.0, 12.0, 12.0, 12.0];
        assert_eq!(chart_efficiency_trend(&samples, EfficiencyTrend::Stable), EfficiencyTrend::Up);
    }

    #[test]
    fn test_chart_trend_partial_older_window() {
        // Cuatro muestras: older = [10], recent = [12, 12, 12]
        let samples = [10.0, 12.0, 12.0, 12.0];
        assert_eq!(chart_efficiency_trend(&samples, EfficiencyTrend::Stable), EfficiencyTrend::Up);
    }
}
