use gdamage::prelude::*;
use gdamage::StrError;
use russell_lab::*;

const N_POINTS: usize = 64; // number of integration points
const N_STEPS: usize = 8; // number of load steps
const MAX_STRAIN: f64 = 0.004; // maximum axial strain at the last point

/// Returns the plane-strain strains of all points at a load step (point-major)
fn strains_at_step(step: usize) -> Vector {
    let q = 3;
    let load = (step + 1) as f64 / (N_STEPS as f64);
    let mut strains = Vector::new(N_POINTS * q);
    for p in 0..N_POINTS {
        let s = load * MAX_STRAIN * (p as f64) / ((N_POINTS - 1) as f64);
        strains[p * q] = s;
        strains[p * q + 1] = -0.2 * s;
        strains[p * q + 2] = 0.5 * s;
    }
    strains
}

#[test]
fn test_gradient_damage_ip_loop() -> Result<(), StrError> {
    // parameters: the local and gradient models share the softening rate β = ft / gf
    let param_gradient = ParamDamage::Gradient {
        young: 1000.0,
        poisson: 0.2,
        ft: 1.0,
        alpha: 0.99,
        beta: 0.1,
        k: 10.0,
    };
    let param_local = SampleParams::param_local_damage();
    let path = "/tmp/gdamage/test_gradient_damage_ip_loop.json";
    param_gradient.write_json(path)?;
    let param_read = ParamDamage::read_json(path)?;
    assert_eq!(param_read, param_gradient);

    // models
    let mut gradient = match DamageModel::new(Constraint::PlaneStrain, &param_read)? {
        DamageModel::Gradient(law) => law,
        DamageModel::Local(..) => return Err("gradient model expected"),
    };
    let mut local = match DamageModel::new(Constraint::PlaneStrain, &param_local)? {
        DamageModel::Local(law) => law,
        DamageModel::Gradient(..) => return Err("local model expected"),
    };
    local.resize(N_POINTS);

    // loop over integration points
    let mut config = Config::new();
    config.set_parallel(true)?.set_parallel_min_points(16)?;
    let mut ip_loop = IpLoop::new(&mut gradient, config);
    ip_loop.resize(N_POINTS);

    let mut stress = Vector::new(3);
    let mut dsigma_deps = Matrix::new(3, 3);
    for step in 0..N_STEPS {
        let strains = strains_at_step(step);

        // homogeneous limit: the nonlocal equivalent strain equals the local one
        let zero = Vector::new(N_POINTS);
        ip_loop.evaluate(&strains, &zero);
        let neeq = Vector::from(&ip_loop.get(Quantity::Eeq).to_vec());
        ip_loop.evaluate(&strains, &neeq);

        // compare with the local model
        let sigma = ip_loop.get(Quantity::Sigma);
        for p in 0..N_POINTS {
            let strain = Vector::from(&strains.as_data()[p * 3..(p + 1) * 3].to_vec());
            local.evaluate(&mut stress, &mut dsigma_deps, &strain, p);
            for m in 0..3 {
                approx_eq(sigma[p * 3 + m], stress[m], 1e-13);
            }
            local.update(&strain, p);
        }

        // commit
        ip_loop.update(&strains, &neeq);
        for p in 0..N_POINTS {
            assert_eq!(ip_loop.law().kappa(p), local.kappa(p));
        }
    }

    // the points with larger strains are damaged
    assert_eq!(ip_loop.law().damage(0), 0.0);
    assert!(ip_loop.law().damage(N_POINTS - 1) > 0.5);
    Ok(())
}
