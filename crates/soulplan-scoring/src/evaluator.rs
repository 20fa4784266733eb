//! StatEvaluator - scores candidates for one team member.

use soulplan_core::{
    Attribute, Candidate, Constraints, Evaluation, Modifiers, Objective, Shikigami, StatOptions,
};

use crate::stats;

/// Everything needed to score candidates for one shikigami.
///
/// [`evaluate`](Self::evaluate) is the scoring callback handed to the
/// combination search. Candidates violating a speed or crit constraint get
/// the zero evaluation.
///
/// # Examples
///
/// ```
/// use soulplan_core::{Attribute, Candidate, Constraints, RangeConstraint, Shikigami, Soul};
/// use soulplan_scoring::StatEvaluator;
///
/// let onikiri = Shikigami::lookup("onikiri").unwrap().stats;
/// let soul = Soul::new("harpy").with_spd(5);
/// let candidate = Candidate::new([&soul; 6]);
///
/// let evaluator = StatEvaluator::new(onikiri);
/// assert_eq!(evaluator.evaluate(candidate.clone()).speed, 147);
///
/// let too_slow = StatEvaluator::new(onikiri)
///     .with_constraints(Constraints::new().with(Attribute::Speed, RangeConstraint::at_least(150)));
/// assert!(too_slow.evaluate(candidate).is_zero());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatEvaluator {
    shikigami: Shikigami,
    modifiers: Modifiers,
    options: StatOptions,
    constraints: Constraints,
    objective: Objective,
}

impl StatEvaluator {
    pub fn new(shikigami: Shikigami) -> Self {
        Self {
            shikigami,
            ..Self::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_options(mut self, options: StatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    pub fn shikigami(&self) -> &Shikigami {
        &self.shikigami
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn options(&self) -> &StatOptions {
        &self.options
    }

    /// Scores `candidate`, or returns the zero evaluation if a constraint fails.
    pub fn evaluate<'a>(&self, candidate: Candidate<'a>) -> Evaluation<'a> {
        let shiki = &self.shikigami;

        let speed = stats::speed(shiki, &candidate);
        if !self.constraints.allows(Attribute::Speed, speed) {
            return Evaluation::zero();
        }

        let crit = stats::compute_crit(shiki, &candidate, &self.modifiers, &self.options);
        if !self.constraints.allows(Attribute::Crit, crit) {
            return Evaluation::zero();
        }

        let damage = stats::damage(shiki, &candidate, &self.modifiers, &self.options);
        let hp = stats::hp(shiki, &candidate, &self.modifiers);
        let heal = stats::heal(shiki, &candidate, &self.modifiers, &self.options);

        Evaluation {
            damage: damage as i64,
            heal: heal as i64,
            hp: hp as i64,
            crit,
            speed,
            candidate: Some(candidate),
        }
    }
}
