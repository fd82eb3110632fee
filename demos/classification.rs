//! Trains a two-layer network on a comma-separated dataset.
//!
//! cargo run --example classification -- <iris|wine|balance-scale> <data file> [hyper.json]

use std::error::Error;

use mutant::data::{self, Label, Schema};
use mutant::{util, Activations, HillClimb, Hyper, Losses, Mutations, Network};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn schema(name: &str) -> Option<(Schema, f64)> {
    let schema = match name {
        "iris" => Schema::new(
            4,
            Label::Last,
            &["Iris-setosa", "Iris-versicolor", "Iris-virginica"],
        ),
        "wine" => Schema::new(13, Label::First, &["1", "2", "3"]),
        "balance-scale" => {
            let mut s = Schema::new(4, Label::First, &["B", "L", "R"]);
            s.set_scale(10.);
            s
        }
        _ => return None,
    };

    let train_ratio = if name == "wine" { 0.9 } else { 0.5 };
    Some((schema, train_ratio))
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = std::env::args().collect::<Vec<String>>();
    if args.len() < 3 {
        eprintln!("usage: {} <iris|wine|balance-scale> <data file> [hyper.json]", args[0]);
        std::process::exit(2);
    }

    let (schema, train_ratio) =
        schema(&args[1]).ok_or_else(|| format!("unknown dataset {:?}", args[1]))?;

    let hyper = match args.get(3) {
        Some(path) => Hyper::load(path)?,
        None => Hyper {
            iterations: 20000,
            mutation: Mutations::Gaussian { stddev: 0.05 },
            log_every: 1000,
            ..Hyper::new()
        },
    };

    let mut rng = hyper.rng();
    let mut samples = data::load::<f64>(&args[2], &schema)?;
    util::shuffle(&mut rng, &mut samples);
    let (train, test) = data::split(samples, train_ratio);
    info!(train = train.len(), test = test.len(), "dataset ready");

    let mut nn = Network::new(schema.features);
    nn.dense(8, Activations::Tanh)
        .dense(schema.classes.len(), Activations::Softmax);

    HillClimb::new(
        &mut nn,
        |nn: &Network<f64>| nn.fitness(&train, Losses::SquaredError),
        rng,
    )
    .override_hyper(hyper)
    .verbose()
    .train()?;

    println!("Train accuracy {:.2}%", nn.accuracy(&train));
    println!("Test accuracy {:.2}%", nn.accuracy(&test));

    Ok(())
}
