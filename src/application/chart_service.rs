// Chart service - Use case for building the scatterplot
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::chart::{
    Axis, AxisTick, LegendEntry, Marker, Scatterplot, DOPING_COLOR, DOPING_LEGEND, MARGIN,
    NO_DOPING_COLOR, NO_DOPING_LEGEND,
};
use crate::domain::record::{RaceRecord, TIME_FORMAT};
use crate::domain::scale::{CategoryColorScale, LinearScale, TimeScale, DEFAULT_TICK_COUNT};
use crate::domain::tooltip::{PointerEvent, Tooltip};
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn DatasetRepository>,
}

impl ChartService {
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self { repository }
    }

    pub async fn build_chart(&self) -> anyhow::Result<Scatterplot> {
        let records = self.repository.fetch_records().await?;
        Self::assemble(&records)
    }

    /// Resolve the hover tooltip for one rendered marker. None means the
    /// marker index does not exist in the dataset.
    pub async fn marker_tooltip(
        &self,
        marker: usize,
        pointer: PointerEvent,
    ) -> anyhow::Result<Option<Tooltip>> {
        let records = self.repository.fetch_records().await?;
        Ok(records
            .get(marker)
            .map(|record| Tooltip::default().pointer_enter(record, pointer)))
    }

    /// Assemble the scatterplot view model from the record sequence
    pub fn assemble(records: &[RaceRecord]) -> anyhow::Result<Scatterplot> {
        let year_scale = Self::year_scale(records)?;
        let time_scale = Self::time_scale(records)?;
        let color_scale = CategoryColorScale::new(NO_DOPING_COLOR, DOPING_COLOR);

        let x_ticks = year_scale
            .ticks(DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|year| AxisTick::new(year_scale.scale(year), format!("{}", year as i64)))
            .collect();
        let y_ticks = time_scale
            .ticks(DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|time| AxisTick::new(time_scale.scale(time), time.format(TIME_FORMAT).to_string()))
            .collect();

        let markers = records
            .iter()
            .map(|record| {
                Marker::new(
                    year_scale.scale(f64::from(record.year)) + MARGIN.left,
                    time_scale.scale(record.time) + MARGIN.top,
                    color_scale.color(record.doping_flagged()),
                    record.year,
                    record.time_iso(),
                )
            })
            .collect();

        let legend = color_scale
            .domain()
            .into_iter()
            .map(|flagged| {
                LegendEntry::new(
                    color_scale.color(flagged),
                    if flagged { DOPING_LEGEND } else { NO_DOPING_LEGEND },
                    if flagged { -105.0 } else { 105.0 },
                )
            })
            .collect();

        Ok(Scatterplot::new(
            Axis::new("Year".to_string(), x_ticks),
            Axis::new("Time (in minutes)".to_string(), y_ticks),
            markers,
            legend,
        ))
    }

    /// Year extents padded by one year on both sides, mapped onto the plot width
    fn year_scale(records: &[RaceRecord]) -> anyhow::Result<LinearScale> {
        let min = records
            .iter()
            .map(|r| r.year)
            .min()
            .context("dataset contains no records")?;
        let max = records
            .iter()
            .map(|r| r.year)
            .max()
            .context("dataset contains no records")?;
        Ok(LinearScale::new(
            (f64::from(min - 1), f64::from(max + 1)),
            (0.0, MARGIN.plot_width()),
        ))
    }

    /// Time extents mapped onto the plot height, fastest time at the top
    fn time_scale(records: &[RaceRecord]) -> anyhow::Result<TimeScale> {
        let min = records
            .iter()
            .map(|r| r.time)
            .min()
            .context("dataset contains no records")?;
        let max = records
            .iter()
            .map(|r| r.time)
            .max()
            .context("dataset contains no records")?;
        Ok(TimeScale::new((min, max), (0.0, MARGIN.plot_height())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::parse_race_time;

    fn dataset() -> Vec<RaceRecord> {
        vec![
            RaceRecord::new(
                1994,
                parse_race_time("36:50").unwrap(),
                "Marco Pantani".to_string(),
                "ITA".to_string(),
                String::new(),
            ),
            RaceRecord::new(
                2015,
                parse_race_time("38:01").unwrap(),
                "Alberto Contador".to_string(),
                "ESP".to_string(),
                "Confessed in 2015".to_string(),
            ),
        ]
    }

    #[test]
    fn test_markers_carry_year_and_iso_time() {
        let chart = ChartService::assemble(&dataset()).unwrap();
        assert_eq!(chart.markers.len(), 2);
        assert_eq!(chart.markers[0].year, 1994);
        assert_eq!(chart.markers[0].time_iso, "1970-01-01T00:36:50.000Z");
        assert_eq!(chart.markers[1].year, 2015);
        assert_eq!(chart.markers[1].time_iso, "1970-01-01T00:38:01.000Z");
    }

    #[test]
    fn test_markers_are_colored_by_doping_flag() {
        let chart = ChartService::assemble(&dataset()).unwrap();
        assert_eq!(chart.markers[0].color, NO_DOPING_COLOR);
        assert_eq!(chart.markers[1].color, DOPING_COLOR);
    }

    #[test]
    fn test_marker_positions_follow_the_scales() {
        let chart = ChartService::assemble(&dataset()).unwrap();
        // Domain [1993, 2016] onto [0, 680], plus the left margin
        let year_scale = LinearScale::new((1993.0, 2016.0), (0.0, 680.0));
        assert_eq!(chart.markers[0].cx, year_scale.scale(1994.0) + MARGIN.left);
        assert_eq!(chart.markers[1].cx, year_scale.scale(2015.0) + MARGIN.left);
        // Fastest time sits at the top edge of the plot area
        assert_eq!(chart.markers[0].cy, MARGIN.top);
        assert_eq!(chart.markers[1].cy, MARGIN.top + MARGIN.plot_height());
    }

    #[test]
    fn test_legend_entries_match_the_color_mapping() {
        let chart = ChartService::assemble(&dataset()).unwrap();
        assert_eq!(chart.legend.len(), 2);
        assert_eq!(chart.legend[0].label, "No doping allegations");
        assert_eq!(chart.legend[0].color, NO_DOPING_COLOR);
        assert_eq!(chart.legend[0].dx, 105.0);
        assert_eq!(chart.legend[1].label, "Riders with doping allegations");
        assert_eq!(chart.legend[1].color, DOPING_COLOR);
        assert_eq!(chart.legend[1].dx, -105.0);
    }

    #[test]
    fn test_axis_tick_labels_use_the_formatters() {
        let chart = ChartService::assemble(&dataset()).unwrap();
        assert!(chart.x_axis.ticks.iter().all(|t| t.label.parse::<i64>().is_ok()));
        assert!(chart.y_axis.ticks.iter().all(|t| t.label.len() == 5 && t.label.contains(':')));
        assert_eq!(chart.x_axis.title, "Year");
        assert_eq!(chart.y_axis.title, "Time (in minutes)");
    }

    #[test]
    fn test_empty_dataset_fails_to_assemble() {
        assert!(ChartService::assemble(&[]).is_err());
    }
}
