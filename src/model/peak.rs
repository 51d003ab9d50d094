use ndarray::ArrayView1;

use crate::error::{ModelError, ModelResult};

/// Maximum point of one torque series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub index: usize,
    /// Distance traveled (m)
    pub position: f64,
    /// N·m
    pub torque: f64,
}

impl Peak {
    /// Locate the maximum torque of a series and the position it occurs at.
    pub fn find(positions: ArrayView1<'_, f64>, torques: ArrayView1<'_, f64>) -> ModelResult<Self> {
        if positions.len() != torques.len() {
            return Err(ModelError::invalid_input(format!(
                "position and torque series differ in length ({} vs {})",
                positions.len(),
                torques.len()
            )));
        }
        let index = peak_index(torques)?;
        Ok(Self {
            index,
            position: positions[index],
            torque: torques[index],
        })
    }

    pub fn label(&self) -> String {
        format!("d={:.1} m, T={:.1} N·m", self.position, self.torque)
    }
}

/// Index of the largest value. Ties go to the earliest index and NaN never wins.
pub fn peak_index(values: ArrayView1<'_, f64>) -> ModelResult<usize> {
    if values.is_empty() {
        return Err(ModelError::invalid_input("cannot take the peak of an empty series"));
    }

    let mut best: Option<(usize, f64)> = None;
    for (i, &value) in values.iter().enumerate() {
        match best {
            Some((_, max)) if !(value > max) => {}
            _ if value.is_nan() => {}
            _ => best = Some((i, value)),
        }
    }

    best.map(|(i, _)| i)
        .ok_or_else(|| ModelError::invalid_input("series contains only NaN values"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn first_maximum_wins() {
        let values = array![1.0, 5.0, 9.0, 9.0, 3.0];
        assert_eq!(peak_index(values.view()).unwrap(), 2);
    }

    #[test]
    fn maximum_at_either_end() {
        assert_eq!(peak_index(array![7.0, 1.0, 2.0].view()).unwrap(), 0);
        assert_eq!(peak_index(array![1.0, 2.0, 7.0].view()).unwrap(), 2);
    }

    #[test]
    fn nan_is_skipped() {
        let values = array![f64::NAN, 2.0, f64::NAN, 4.0, 1.0];
        assert_eq!(peak_index(values.view()).unwrap(), 3);

        let all_nan = array![f64::NAN, f64::NAN];
        assert!(matches!(
            peak_index(all_nan.view()),
            Err(ModelError::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_series_is_invalid() {
        let empty: [f64; 0] = [];
        let err = peak_index(ArrayView1::from(&empty[..])).unwrap_err();
        assert!(matches!(err, ModelError::InvalidInput(ref msg) if msg.contains("empty")));
    }

    #[test]
    fn peak_reports_position_and_label() {
        let positions = array![0.0, 250.0, 500.0, 750.0];
        let torques = array![40.0, 180.26, 175.0, 60.0];

        let peak = Peak::find(positions.view(), torques.view()).unwrap();

        assert_eq!(peak.index, 1);
        assert_eq!(peak.position, 250.0);
        assert_eq!(peak.label(), "d=250.0 m, T=180.3 N·m");
    }

    #[test]
    fn mismatched_series_are_invalid() {
        let positions = array![0.0, 1.0];
        let torques = array![1.0];
        assert!(Peak::find(positions.view(), torques.view()).is_err());
    }
}
