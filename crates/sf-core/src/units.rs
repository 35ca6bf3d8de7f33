// sf-core/src/units.rs

use uom::si::f64::{MassRate as UomMassRate, Ratio as UomRatio};

// Public canonical unit types (SI, f64)
pub type MassRate = UomMassRate;
pub type Ratio = UomRatio;

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Ratio as a bare fraction (0.6, not 60%).
#[inline]
pub fn as_fraction(r: Ratio) -> f64 {
    use uom::si::ratio::ratio;
    r.get::<ratio>()
}

/// Mass flow in kg/s as a bare float, for printing and comparisons.
#[inline]
pub fn as_kgps(mdot: MassRate) -> f64 {
    use uom::si::mass_rate::kilogram_per_second;
    mdot.get::<kilogram_per_second>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn constructors_smoke() {
        let mdot = kgps(1.2);
        assert_eq!(mdot.value, 1.2);
        assert_eq!(as_kgps(mdot), 1.2);
        let r = unitless(0.5);
        assert_eq!(r.value, 0.5);
        assert_eq!(as_fraction(r), 0.5);
    }

    #[test]
    fn mass_rate_arithmetic_stays_in_si() {
        let total = kgps(10.0) + kgps(20.0);
        assert!(nearly_equal(as_kgps(total * 0.6), 18.0, Tolerances::BALANCE));
    }
}
