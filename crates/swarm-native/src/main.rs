use std::f32::consts::TAU;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use glam::Vec2;
use swarm_core::{
    Camera, DeviceTier, FingerState, HandInput, HandLandmarks, SwarmConfig, SwarmController,
    FRAME_DT,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Tier {
    Standard,
    Constrained,
}

impl From<Tier> for DeviceTier {
    fn from(t: Tier) -> Self {
        match t {
            Tier::Standard => DeviceTier::Standard,
            Tier::Constrained => DeviceTier::Constrained,
        }
    }
}

/// Plays a scripted hand session through the swarm engine and logs what the
/// renderer would be handed.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Device tier; selects the agent count
    #[arg(long, value_enum, default_value_t = Tier::Standard)]
    tier: Tier,

    /// Number of 1/60 s ticks to simulate
    #[arg(long, default_value_t = 13 * 60)]
    ticks: u32,

    /// Seed for the spawn positions
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Log a status line every N ticks
    #[arg(long, default_value_t = 60)]
    log_every: u32,

    /// Deliver a new video frame only every other tick (30 fps capture)
    #[arg(long)]
    half_rate_video: bool,
}

// Scripted session: (start second, pose); `None` means no hand in view.
const SCRIPT: &[(f32, Option<FingerState>)] = &[
    (0.0, None),
    (1.0, Some(FingerState::new(true, true, true, true, true))), // open palm
    (3.0, Some(FingerState::new(false, false, false, false, false))), // fist
    (5.0, Some(FingerState::new(false, true, true, false, false))), // sword fingers
    (9.0, Some(FingerState::new(false, true, false, false, true))), // horns
    (12.0, None),
];
const SCRIPT_LEN_SEC: f32 = 13.0;

fn pose_at(t: f32) -> Option<FingerState> {
    let t = t % SCRIPT_LEN_SEC;
    SCRIPT
        .iter()
        .rev()
        .find(|(start, _)| t >= *start)
        .and_then(|(_, pose)| *pose)
}

/// Wrist drifts on a slow ellipse so the trail has something to follow.
fn wrist_at(t: f32) -> Vec2 {
    let a = t * TAU * 0.2;
    Vec2::new(0.5 + 0.15 * a.cos(), 0.65 + 0.1 * a.sin())
}

fn hand_input(tick: u32, t: f32, half_rate_video: bool) -> HandInput {
    if half_rate_video && tick % 2 == 1 {
        return HandInput::Unchanged;
    }
    match pose_at(t) {
        Some(pose) => HandInput::Detected(HandLandmarks::synthetic(pose, wrist_at(t))),
        None => HandInput::Absent,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = SwarmConfig::for_tier(args.tier.into());
    let mut controller = SwarmController::new(config, Camera::default(), args.seed)
        .context("building swarm controller")?;

    let started = Instant::now();
    let log_every = args.log_every.max(1);
    for tick in 0..args.ticks {
        let now = tick as f64 * FRAME_DT as f64;
        let input = hand_input(tick, now as f32, args.half_rate_video);
        controller.tick(now, FRAME_DT, &input);

        if tick % log_every == 0 {
            let status = controller.status();
            let snap = controller.snapshot();
            let lead = snap.agents.first().map(|a| a.scale).unwrap_or(0.0);
            let lit = snap.agents.iter().filter(|a| a.aura).count();
            log::info!(
                "[sim] t={:5.2}s {:<24} formation={:<6} center=({:6.2},{:6.2},{:6.2}) span={:6.2} lead_scale={:.2} aura={}/{}",
                now,
                status.label(),
                snap.mode.as_str(),
                snap.bounds.center.x,
                snap.bounds.center.y,
                snap.bounds.center.z,
                snap.bounds.span,
                lead,
                lit,
                snap.len()
            );
        }
    }

    let snap = controller.snapshot();
    let instances = snap.instances();
    let bytes: &[u8] = bytemuck::cast_slice(&instances);
    log::info!(
        "[sim] {} ticks in {:.1} ms; final instance buffer {} bytes for {} agents",
        args.ticks,
        started.elapsed().as_secs_f64() * 1000.0,
        bytes.len(),
        snap.len()
    );
    Ok(())
}
