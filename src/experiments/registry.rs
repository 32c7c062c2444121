//! # Built-in experiment registry
//!
//! Immutable lookup from experiment identifier to
//! [`ExperimentParameters`]. Keys are opaque composite strings (study name,
//! country, author). The registry is constructed once from the literal table
//! below, lives for the process duration, and exposes no mutation API, so it
//! can be shared freely across threads.
//!
//! An unknown identifier is a hard failure
//! ([`UnifyError::UnknownExperiment`]); consumers must never substitute
//! defaults for an unregistered study.
use std::collections::HashMap;

use ahash::RandomState;

use crate::experiments::{CaptureView, ExperimentParameters, TemporalUnit};
use crate::unify_errors::UnifyError;

/// Immutable mapping from experiment identifier to normalization parameters.
#[derive(Debug, Clone)]
pub struct ExperimentRegistry {
    entries: HashMap<String, ExperimentParameters, RandomState>,
}

impl ExperimentRegistry {
    /// Look up the parameters of one experiment.
    ///
    /// Arguments
    /// ---------
    /// * `experiment_id`: opaque registry key, e.g. `"age_china_Cao"`
    ///
    /// Return
    /// ------
    /// * The parameter record, or [`UnifyError::UnknownExperiment`] for an
    ///   unregistered identifier.
    pub fn get(&self, experiment_id: &str) -> Result<&ExperimentParameters, UnifyError> {
        self.entries
            .get(experiment_id)
            .ok_or_else(|| UnifyError::UnknownExperiment(experiment_id.to_string()))
    }

    /// Whether an experiment is registered.
    pub fn contains(&self, experiment_id: &str) -> bool {
        self.entries.contains_key(experiment_id)
    }

    /// Iterate over all registered experiments.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExperimentParameters)> {
        self.entries
            .iter()
            .map(|(key, params)| (key.as_str(), params))
    }

    /// Number of registered experiments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the registry of all known experiments.
    ///
    /// One entry per data-collection study, with the normalization
    /// parameters of its recording setup. Unspecified fields take the
    /// documented defaults ([`ExperimentParameters::default`]).
    pub fn builtin() -> Self {
        let doi = |suffix: &str| Some(format!("https://doi.org/10.34735/{suffix}"));
        let oval_small = ExperimentParameters {
            length: 2.3,
            radius: 1.65,
            circumference: 14.97,
            ..Default::default()
        };

        let entries: [(&str, ExperimentParameters); 29] = [
            (
                "BaSiGo_germany_Ziemer",
                ExperimentParameters {
                    source_link: doi("ped.2013.7"),
                    shift_x: 1.0,
                    shift_y: 3.0,
                    ref_y: -1.0,
                    x_axis_source: Some(3),
                    y_axis_source: Some(2),
                    fps: 16,
                    length: 4.0,
                    radius: 3.0,
                    circumference: 26.84,
                    ..Default::default()
                },
            ),
            (
                "schoolWDGMainCircle_germany_Wang",
                ExperimentParameters {
                    source_link: doi("ped.2014.2"),
                    shift_x: 1.25,
                    shift_y: 1.85,
                    ref_y: -1.0,
                    length: 2.5,
                    radius: 1.85,
                    circumference: 16.62,
                    ..Default::default()
                },
            ),
            (
                "schoolGymBayMainCircle_germany_Wang",
                ExperimentParameters {
                    source_link: doi("ped.2014.2"),
                    shift_x: 1.25,
                    shift_y: 1.85,
                    x_axis_source: Some(2),
                    y_axis_source: Some(3),
                    ref_y: -1.0,
                    length: 2.5,
                    radius: 1.85,
                    circumference: 16.62,
                    ..Default::default()
                },
            ),
            (
                "schoolGymBayAncillaryCircle_germany_Wang",
                ExperimentParameters {
                    source_link: doi("ped.2014.2"),
                    unit: 100,
                    shift_x: 1.25,
                    shift_y: 1.85,
                    x_axis_source: Some(3),
                    y_axis_source: Some(2),
                    // this experiment runs clockwise
                    ref_x: -1.0,
                    ref_y: -1.0,
                    length: 2.5,
                    radius: 1.85,
                    circumference: 16.62,
                    ..Default::default()
                },
            ),
            (
                "schoolWDGAncillaryCircle_germany_Wang",
                ExperimentParameters {
                    source_link: doi("ped.2014.2"),
                    unit: 100,
                    shift_x: 1.25,
                    shift_y: 1.85,
                    x_axis_source: Some(2),
                    y_axis_source: Some(3),
                    // this experiment runs clockwise
                    ref_x: -1.0,
                    ref_y: -1.0,
                    length: 2.5,
                    radius: 1.85,
                    circumference: 16.62,
                    ..Default::default()
                },
            ),
            (
                "age_china_Cao",
                ExperimentParameters {
                    source_link: doi("ped.2017.1"),
                    shift_x: 2.5,
                    shift_y: 2.5,
                    unit: 100,
                    length: 5.0,
                    radius: 2.5,
                    circumference: 25.70,
                    ..Default::default()
                },
            ),
            (
                "gender_palestine_Subaih",
                ExperimentParameters {
                    source_link: doi("ped.2018.5"),
                    area_min: Some(0.0),
                    area_max: Some(3.14),
                    length: 3.14,
                    circumference: 3.14,
                    capture_view: CaptureView::Side,
                    ..Default::default()
                },
            ),
            (
                "caserne_germany_Seyfried",
                ExperimentParameters {
                    source_link: doi("ped.2006.1"),
                    shift_x: 2.0,
                    y_axis_source: None,
                    unit: 100,
                    area_min: Some(-2.0),
                    area_max: Some(2.0),
                    length: 4.0,
                    capture_view: CaptureView::Side,
                    ..Default::default()
                },
            ),
            (
                "motivation_germany_lukowski",
                ExperimentParameters {
                    y_axis_source: None,
                    unit: 100,
                    area_min: Some(0.0),
                    area_max: Some(2.0),
                    length: 2.0,
                    capture_view: CaptureView::Side,
                    ..Default::default()
                },
            ),
            (
                "genderCroMa_setupRight_germany_paetzke",
                ExperimentParameters {
                    source_link: doi("ped.2021.5"),
                    shift_x: -1.7,
                    shift_y: 4.6,
                    ref_y: -1.0,
                    x_axis_source: Some(1),
                    y_axis_source: Some(0),
                    ..oval_small.clone()
                },
            ),
            (
                "genderCroMa_setupLeft_germany_paetzke",
                ExperimentParameters {
                    source_link: doi("ped.2021.5"),
                    shift_x: -1.7,
                    shift_y: -1.3,
                    ref_y: -1.0,
                    x_axis_source: Some(1),
                    y_axis_source: Some(0),
                    ..oval_small.clone()
                },
            ),
            (
                "music_china_zeng2019",
                ExperimentParameters {
                    unit: 100,
                    shift_x: 2.3,
                    shift_y: 1.9,
                    x_axis_source: Some(2),
                    y_axis_source: Some(3),
                    length: 4.995975,
                    radius: 1.9,
                    circumference: 21.93,
                    ..Default::default()
                },
            ),
            (
                "elderly_china_ren",
                ExperimentParameters {
                    shift_x: 2.5,
                    shift_y: 2.5,
                    ref_x: -1.0,
                    x_axis_source: Some(2),
                    y_axis_source: Some(3),
                    length: 5.0,
                    radius: 2.5,
                    circumference: 25.7,
                    ..Default::default()
                },
            ),
            (
                "heightConstrains_china_ma",
                ExperimentParameters {
                    length: 4.0,
                    radius: 2.4,
                    circumference: 28.08,
                    temporal_unit: TemporalUnit::Seconds,
                    ..Default::default()
                },
            ),
            (
                "simulation_pathfinder_4fps",
                ExperimentParameters {
                    shift_y: 0.4,
                    x_axis_source: Some(2),
                    y_axis_source: Some(3),
                    fps: 4,
                    ..oval_small.clone()
                },
            ),
            (
                "simulation_pathfinder_25fps",
                ExperimentParameters {
                    shift_y: 0.4,
                    x_axis_source: Some(2),
                    y_axis_source: Some(3),
                    ..oval_small.clone()
                },
            ),
            ("sim_jupedsim", oval_small.clone()),
            (
                "australia_left_MC",
                ExperimentParameters {
                    ref_x: -1.0,
                    ref_y: -1.0,
                    x_axis_source: Some(1),
                    y_axis_source: Some(0),
                    shift_x: 3.0,
                    shift_y: 1.8,
                    ..oval_small.clone()
                },
            ),
            (
                "australia_right_MC",
                ExperimentParameters {
                    ref_x: -1.0,
                    ref_y: -1.0,
                    x_axis_source: Some(1),
                    y_axis_source: Some(0),
                    shift_x: 3.0,
                    shift_y: 8.0,
                    ..oval_small.clone()
                },
            ),
            (
                "japan_MC",
                ExperimentParameters {
                    ref_x: -1.0,
                    shift_x: 1.3,
                    shift_y: 1.5,
                    ..oval_small.clone()
                },
            ),
            (
                "china_1_MC",
                ExperimentParameters {
                    ref_x: -1.0,
                    ref_y: -1.0,
                    x_axis_source: Some(3),
                    y_axis_source: Some(2),
                    shift_x: 1.3,
                    shift_y: 1.5,
                    ..oval_small.clone()
                },
            ),
            (
                "china_2_MC",
                ExperimentParameters {
                    ref_x: -1.0,
                    x_axis_source: Some(3),
                    y_axis_source: Some(2),
                    shift_x: 1.3,
                    shift_y: 1.5,
                    ..oval_small.clone()
                },
            ),
            (
                "australia_left_MC_2",
                ExperimentParameters {
                    ref_y: -1.0,
                    shift_x: 1.15,
                    shift_y: 1.8,
                    ..oval_small.clone()
                },
            ),
            (
                "australia_right_MC_2",
                ExperimentParameters {
                    ref_y: -1.0,
                    shift_x: 1.0,
                    shift_y: 8.0,
                    ..oval_small.clone()
                },
            ),
            (
                "china_1_MC_2",
                ExperimentParameters {
                    ref_y: -1.0,
                    shift_x: 1.3,
                    shift_y: 1.5,
                    ..oval_small.clone()
                },
            ),
            (
                "china_2_MC_2",
                ExperimentParameters {
                    shift_x: 1.3,
                    shift_y: 1.5,
                    ..oval_small.clone()
                },
            ),
            (
                "germany_right_MC_2",
                ExperimentParameters {
                    shift_x: 1.7,
                    shift_y: -4.6,
                    ..oval_small.clone()
                },
            ),
            (
                "germany_left_MC_2",
                ExperimentParameters {
                    shift_x: 1.7,
                    shift_y: 1.3,
                    ..oval_small.clone()
                },
            ),
            (
                "japan_MC_2",
                ExperimentParameters {
                    ref_x: -1.0,
                    shift_x: 1.3,
                    shift_y: 1.5,
                    ..oval_small.clone()
                },
            ),
        ];

        let entries = entries
            .into_iter()
            .map(|(key, params)| (key.to_string(), params))
            .collect();
        ExperimentRegistry { entries }
    }
}
