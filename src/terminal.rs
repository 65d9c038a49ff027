use crate::{Config, FpsLimiter, Simulation};
use std::io::{self, Write};
use tracing::info;

/// Plays `config.generations` frames of `life` into `out`.
///
/// Every frame steps the simulation once, then writes the clear sequence
/// followed by the rendered field. Returns the number of frames written.
pub fn run_terminal<W: Write>(
    life: &mut Simulation,
    config: &Config,
    out: &mut W,
) -> io::Result<u64> {
    let (width, height) = life.size();
    info!(
        width,
        height,
        generations = config.generations,
        "terminal run started"
    );

    let mut fps_limiter = FpsLimiter::new(config.max_fps);
    for _ in 0..config.generations {
        life.step();
        write!(out, "{}{}", config.clear_sequence, life)?;
        out.flush()?;
        fps_limiter.delay();
    }

    info!(
        generation = life.generation(),
        population = life.population(),
        "terminal run finished"
    );
    Ok(config.generations)
}

#[cfg(test)]
mod tests {
    use super::run_terminal;
    use crate::{Config, Simulation};

    fn fast_config(generations: u64) -> Config {
        Config {
            width: 10,
            height: 4,
            generations,
            max_fps: 1e6,
            seed: Some(7),
            ..Config::default()
        }
    }

    #[test]
    fn writes_one_frame_per_generation() {
        let config = fast_config(5);
        let mut life = Simulation::random(config.width, config.height, config.seed);
        let mut out = Vec::new();

        let frames = run_terminal(&mut life, &config, &mut out).unwrap();
        assert_eq!(frames, 5);
        assert_eq!(life.generation(), 5);

        let text = String::from_utf8(out).unwrap();
        let chunks = text.split('\x0c').skip(1).collect::<Vec<_>>();
        assert_eq!(chunks.len(), 5);
        for chunk in &chunks {
            let lines = chunk.lines().collect::<Vec<_>>();
            assert_eq!(lines.len(), 4);
            assert!(lines.iter().all(|l| l.len() == 10));
        }
        assert_eq!(*chunks.last().unwrap(), life.render());
    }

    #[test]
    fn first_frame_is_after_one_step() {
        let config = fast_config(1);
        let mut expected = Simulation::random(config.width, config.height, config.seed);
        expected.step();

        let mut life = Simulation::random(config.width, config.height, config.seed);
        let mut out = Vec::new();
        run_terminal(&mut life, &config, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("\x0c{}", expected));
    }

    #[test]
    fn zero_generations_write_nothing() {
        let config = fast_config(0);
        let mut life = Simulation::random(config.width, config.height, config.seed);
        let mut out = Vec::new();
        assert_eq!(run_terminal(&mut life, &config, &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }
}
