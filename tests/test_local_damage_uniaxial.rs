use gdamage::prelude::*;
use gdamage::StrError;
use russell_lab::*;

const YOUNG: f64 = 1000.0; // Young's modulus
const ALPHA: f64 = 0.99; // maximum damage

#[test]
fn test_local_damage_uniaxial() -> Result<(), StrError> {
    // model
    let param = SampleParams::param_local_damage();
    let mut model = DamageModel::new(Constraint::UniaxialStrain, &param)?;
    model.actual_mut().resize(1);
    let law = match &mut model {
        DamageModel::Local(law) => law,
        DamageModel::Gradient(..) => return Err("local model expected"),
    };
    let mut stress = Vector::new(1);
    let mut dsigma_deps = Matrix::new(1, 1);

    // elastic state
    let strain = Vector::from(&[0.0005]);
    law.evaluate(&mut stress, &mut dsigma_deps, &strain, 0);
    approx_eq(stress[0], 0.5, 1e-13);
    approx_eq(dsigma_deps.get(0, 0), YOUNG, 1e-13);
    law.update(&strain, 0);
    assert_eq!(law.damage(0), 0.0);

    // damaged state
    let strain = Vector::from(&[0.01]);
    law.evaluate(&mut stress, &mut dsigma_deps, &strain, 0);
    assert!(stress[0].abs() < 0.2 * 0.01 * YOUNG);
    assert!(dsigma_deps.get(0, 0) < YOUNG);
    law.update(&strain, 0);
    let omega = law.damage(0);
    assert!(omega > 0.0 && omega < 1.0);

    // committing the same state again does not change anything
    let kappa = law.kappa(0);
    law.update(&strain, 0);
    assert_eq!(law.kappa(0), kappa);
    assert_eq!(law.damage(0), omega);
    Ok(())
}

#[test]
fn test_local_damage_residual_stiffness() -> Result<(), StrError> {
    // unit-scaled parameters (κ0 = 1, β = 0.5); the equivalent strain equals the axial strain
    let param = SampleParams::param_local_damage_unit();
    let mut model = DamageModel::new(Constraint::UniaxialStress, &param)?;
    let law = match &mut model {
        DamageModel::Local(law) => law,
        DamageModel::Gradient(..) => return Err("local model expected"),
    };
    let path = StrainPath::new_uniaxial(1, 100.0, 100)?;
    let states = path.follow_local(law)?;

    // stress decreases monotonically after the peak and the damage stays below one
    let peak = states[1].stress[0];
    approx_eq(peak, 1.0, 1e-12);
    for i in 2..states.len() {
        if i < 40 {
            assert!(states[i].stress[0] < states[i - 1].stress[0]);
        } else {
            // round-off of 1 - ω once the exponential term has vanished
            assert!(states[i].stress[0] <= states[i - 1].stress[0] * (1.0 + 1e-12));
        }
        assert!(states[i].omega < 1.0);
    }

    // 1 - ω → (1 - α) κ0 / κ
    let kappa0 = 1.0;
    let last = &states[100];
    approx_eq(last.kappa, 100.0, 1e-12);
    approx_eq(1.0 - last.omega, (1.0 - ALPHA) * kappa0 / last.kappa, 1e-15);
    approx_eq(last.stress[0], (1.0 - ALPHA) * kappa0, 1e-12);
    Ok(())
}
