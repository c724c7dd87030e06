/// Ternary threshold applied to the weighted sum of a forward pass.
///
/// Returns `1` for a positive sum, `-1` for a negative sum and `0` for an
/// exact zero.
pub fn sign(sum: f64) -> i32 {
    if sum > 0.0 {
        1
    } else if sum < 0.0 {
        -1
    } else {
        0
    }
}

/// Which neurons sat on an "on" pixel during one forward pass.
///
/// Indexed in network order. Produced by `Perceptron::forward_pass` and
/// handed back to `Perceptron::back_prop` for the same sample, so no
/// activation state lives on the neurons between the two calls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivationMask {
    active: Vec<bool>,
}

impl ActivationMask {
    pub fn new(active: Vec<bool>) -> ActivationMask {
        ActivationMask { active }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active[index]
    }

    /// Number of neurons that fired.
    pub fn count_active(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.active.iter().copied()
    }
}

impl FromIterator<bool> for ActivationMask {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        ActivationMask { active: iter.into_iter().collect() }
    }
}

/// Output of a forward pass: the ternary result plus the activation mask the
/// matching `back_prop` call needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Forward {
    pub result: i32,
    pub activation: ActivationMask,
}
