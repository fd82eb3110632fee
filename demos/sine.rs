use mutant::{Activations, FixedVector, HillClimb, Mutations, Network};
use tracing_subscriber::EnvFilter;

fn predict(nn: &Network<f32>, x: f32) -> f32 {
    nn.forward(&FixedVector::from(vec![x / 10.])).at(0)
}

fn fitness(nn: &Network<f32>) -> f64 {
    let mut error = 0.;
    let mut n = 0;

    let mut x = -5.0f32;
    while x < 5. {
        let target = x.sin();
        let diff = (target - predict(nn, x)) as f64;
        error += diff * diff;
        n += 1;
        x += 0.05;
    }

    error / n as f64
}

fn main() -> mutant::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let iterations = std::env::args()
        .nth(1)
        .and_then(|a| a.parse::<usize>().ok())
        .unwrap_or(50000);

    let mut nn = Network::new(1);
    nn.dense(20, Activations::Tanh).dense(1, Activations::Tanh);

    let best = HillClimb::new(&mut nn, fitness, mutant::util::entropy())
        .set_mutation(Mutations::Reset { rate: 0.05 })
        .set_iterations(iterations)
        .set_log_every(5000)
        .verbose()
        .train()?
        .score_graph("sine.html")
        .best();

    println!("Final error {:?}", best);

    let mut x = -5.0f32;
    while x < 5. {
        println!("{:.3} {:.6}", x, predict(&nn, x));
        x += 0.25;
    }

    Ok(())
}
