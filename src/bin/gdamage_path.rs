use gdamage::prelude::*;
use gdamage::StrError;
use russell_lab::Vector;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "gdamage_path",
    about = "Follows a loading-unloading strain path with a damage model and prints the results"
)]
struct Options {
    /// JSON file with the material parameters (the sample local damage parameters are used if absent)
    #[structopt(short, long)]
    param: Option<String>,

    /// Constraint: uniaxial-strain, uniaxial-stress, plane-strain, plane-stress, or full
    #[structopt(short, long, default_value = "uniaxial-strain")]
    constraint: String,

    /// Maximum value of the first strain component
    #[structopt(short, long, default_value = "0.01")]
    max_strain: f64,

    /// Number of increments of the loading branch
    #[structopt(short, long, default_value = "20")]
    n_increment: usize,

    /// Number of increments of the unloading branch (back to zero strain)
    #[structopt(short, long, default_value = "0")]
    unloading: usize,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();
    let constraint: Constraint = options.constraint.parse()?;
    let param = match &options.param {
        Some(path) => ParamDamage::read_json(path)?,
        None => SampleParams::param_local_damage(),
    };

    // strain path
    let qdim = constraint.qdim();
    let mut path = StrainPath::new_uniaxial(qdim, options.max_strain, options.n_increment)?;
    if options.unloading > 0 {
        path.push_linear(&Vector::new(qdim), options.unloading)?;
    }

    // run
    let mut model = DamageModel::new(constraint, &param)?;
    let states = match &mut model {
        DamageModel::Local(law) => path.follow_local(law)?,
        DamageModel::Gradient(law) => path.follow_gradient(law)?,
    };

    // results
    let thin_line = format!("{:─^1$}", "", 62);
    println!("{}", thin_line);
    println!("{:>14} {:>14} {:>14} {:>14}", "ε", "σ", "κ", "ω");
    println!("{}", thin_line);
    for state in &states {
        println!(
            "{:>14.6e} {:>14.6e} {:>14.6e} {:>14.6}",
            state.strain[0], state.stress[0], state.kappa, state.omega
        );
    }
    println!("{}", thin_line);
    Ok(())
}
