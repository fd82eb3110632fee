use mutant::data::Sample;
use mutant::{Activations, HillClimb, Losses, Mutations, Network};
use tracing_subscriber::EnvFilter;

fn gen_training_data() -> Vec<Sample<f64>> {
    vec![
        Sample::new(vec![0., 1.], vec![1., 0.]),
        Sample::new(vec![1., 1.], vec![0., 1.]),
        Sample::new(vec![1., 0.], vec![1., 0.]),
        Sample::new(vec![0., 0.], vec![0., 1.]),
    ]
}

fn main() -> mutant::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let samples = gen_training_data();

    let mut nn = Network::new(2);
    nn.dense(4, Activations::Tanh).dense(2, Activations::Softmax);

    HillClimb::new(
        &mut nn,
        |nn: &Network<f64>| nn.fitness(&samples, Losses::SquaredError),
        mutant::util::seeded(1),
    )
    .set_mutation(Mutations::CostGuided { stddev: 0.5 })
    .set_threshold(0.01)
    .set_iterations(20000)
    .set_log_every(1000)
    .verbose()
    .train()?;

    for s in samples.iter() {
        println!("{} -> {}", s.input, nn.forward(&s.input));
    }

    println!("Accuracy: {}%", nn.accuracy(&samples));

    Ok(())
}
