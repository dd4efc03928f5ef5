// Host-side tests for the swarm engine and the per-tick controller.

use glam::{Vec2, Vec3};
use swarm_core::{
    AgentInstance, Camera, FingerState, FormationBounds, GestureMode, HandInput, HandLandmarks,
    SwarmConfig, SwarmController, SwarmEngine, SwarmFrame, FRAME_DT,
};

fn frame(k: u32, confirmed: GestureMode, is_tracking: bool, target: Vec3) -> SwarmFrame {
    SwarmFrame {
        time: k as f32 * FRAME_DT,
        dt: FRAME_DT,
        confirmed,
        is_tracking,
        target,
    }
}

fn hand(fingers: FingerState, wrist: Vec2) -> HandInput {
    HandInput::Detected(HandLandmarks::synthetic(fingers, wrist))
}

const FIST: FingerState = FingerState::new(false, false, false, false, false);
const SWORD: FingerState = FingerState::new(false, true, true, false, false);

#[test]
fn seeded_spawn_is_reproducible_and_inside_the_box() {
    let config = SwarmConfig::default().with_agent_count(200);
    let a = SwarmEngine::new(&config, 7);
    let b = SwarmEngine::new(&config, 7);
    let c = SwarmEngine::new(&config, 8);
    assert_eq!(a.agents(), b.agents());
    assert_ne!(a.agents(), c.agents());

    for agent in a.agents() {
        let p = agent.position;
        assert!(p.x.abs() <= 10.0 && p.y.abs() <= 7.5);
        assert!(p.z <= 0.0 && p.z >= -10.0);
        assert_eq!(agent.velocity, Vec3::ZERO);
        assert_eq!(agent.current_scale, 1.0);
    }
}

#[test]
fn stepping_is_deterministic() {
    let config = SwarmConfig::default().with_agent_count(64);
    let mut a = SwarmEngine::new(&config, 3);
    let mut b = SwarmEngine::new(&config, 3);
    let target = Vec3::new(4.0, -2.0, 0.0);
    for k in 0..90 {
        let f = frame(k, GestureMode::Shield, true, target);
        a.step(&f);
        b.step(&f);
    }
    assert_eq!(a.agents(), b.agents());
}

#[test]
fn agent_count_comes_from_the_positions() {
    let config = SwarmConfig::default();
    let engine = SwarmEngine::from_positions(&config, vec![Vec3::ZERO; 3]);
    assert_eq!(engine.agents().len(), 3);
    assert_eq!(engine.config().agent_count, 3);
    assert_eq!(engine.path().len(), 300);
}

#[test]
fn dageng_grows_the_lead_and_shrinks_nothing_else() {
    let config = SwarmConfig::default();
    let positions = (0..10).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
    let mut engine = SwarmEngine::from_positions(&config, positions);
    for k in 0..600 {
        engine.step(&frame(k, GestureMode::Dageng, true, Vec3::ZERO));
    }
    assert_eq!(engine.mode(), GestureMode::Dageng);
    let agents = engine.agents();
    assert!((agents[0].current_scale - 6.0).abs() < 0.06);
    for a in &agents[1..] {
        assert!((a.current_scale - 1.5).abs() < 0.015, "agent {}", a.id);
        assert_eq!(a.facing, Vec3::NEG_Y);
    }
    assert!(agents[0].aura);
    // lead has settled above the hand
    assert!(agents[0].position.distance(Vec3::new(0.0, 5.0, 0.0)) < 0.5);
}

#[test]
fn separation_never_pushes_past_sprint_speed() {
    let config = SwarmConfig::default();
    let sprint = config.motion.sprint_speed;
    for mode in [GestureMode::Dragon, GestureMode::Dageng] {
        let positions = (0..5).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
        let mut engine = SwarmEngine::from_positions(&config, positions);
        let far = Vec3::new(5000.0, 0.0, 0.0);
        let mut fastest = 0.0_f32;
        for k in 0..200 {
            engine.step(&frame(k, mode, true, far));
            for a in engine.agents() {
                fastest = fastest.max(a.velocity.length());
            }
        }
        assert!(fastest <= sprint + 1e-3, "{}: {fastest}", mode.as_str());
        // agents did reach sprint, so the cap was exercised
        assert!(fastest > sprint - 1.0);
    }
}

#[test]
fn untracked_swarm_forms_an_idle_lotus_around_the_origin() {
    let config = SwarmConfig::default().with_agent_count(40);
    let mut engine = SwarmEngine::new(&config, 11);
    // target is ignored while not tracking
    let far = Vec3::new(100.0, 100.0, 0.0);
    for k in 0..600 {
        engine.step(&frame(k, GestureMode::Dragon, false, far));
    }
    assert_eq!(engine.mode(), GestureMode::Lotus);
    let bounds = engine.bounds();
    assert!(bounds.center.length() < 3.0, "center {:?}", bounds.center);
    for a in engine.agents() {
        assert!(a.position.truncate().length() < 30.0);
        assert!(a.position.z.abs() < 2.0);
    }
}

#[test]
fn bounds_use_mean_center_and_widest_planar_extent() {
    let b = FormationBounds::from_positions([
        Vec3::new(-2.0, 0.0, 0.0),
        Vec3::new(2.0, 1.0, 0.0),
        Vec3::new(0.0, -3.0, 9.0),
    ]);
    assert!((b.center - Vec3::new(0.0, -2.0 / 3.0, 3.0)).length() < 1e-5);
    assert_eq!(b.span, 4.0);
    assert_eq!(
        FormationBounds::from_positions(Vec::<Vec3>::new()),
        FormationBounds::default()
    );
    assert_eq!(FormationBounds::default().span, 10.0);
}

#[test]
fn snapshot_mirrors_agents_and_packs_instances() {
    let config = SwarmConfig::default().with_agent_count(25);
    let mut engine = SwarmEngine::new(&config, 5);
    for k in 0..30 {
        engine.step(&frame(k, GestureMode::Shield, true, Vec3::ZERO));
    }
    let snap = engine.snapshot();
    assert_eq!(snap.len(), 25);
    assert_eq!(snap.mode, GestureMode::Shield);
    assert!(snap.is_tracking);
    assert!((snap.time - 29.0 * FRAME_DT).abs() < 1e-6);

    for (view, agent) in snap.agents.iter().zip(engine.agents()) {
        assert_eq!(view.position, agent.position);
        assert_eq!(view.look_target, agent.position + agent.facing);
        if agent.aura {
            assert!((view.aura_scale - agent.current_scale * 1.3).abs() < 1e-5);
        } else {
            assert_eq!(view.aura_scale, 0.0);
        }
        let t = view.model_matrix().w_axis.truncate();
        assert!((t - agent.position).length() < 1e-4);
    }

    let instances = snap.instances();
    assert_eq!(instances.len(), 25);
    let bytes: &[u8] = bytemuck::cast_slice(&instances);
    assert_eq!(bytes.len(), 25 * std::mem::size_of::<AgentInstance>());
    assert_eq!(std::mem::size_of::<AgentInstance>(), 80);
}

fn controller(agents: usize) -> SwarmController {
    SwarmController::new(
        SwarmConfig::default().with_agent_count(agents),
        Camera::default(),
        1,
    )
    .unwrap()
}

#[test]
fn controller_confirms_a_held_gesture_after_the_debounce() {
    let mut c = controller(30);
    assert_eq!(c.status().label(), "Waiting for Gesture...");

    let input = hand(FIST, Vec2::new(0.5, 0.6));
    for k in 0..15 {
        c.tick(k as f64 / 60.0, FRAME_DT, &input);
        assert_eq!(c.status().confirmed, GestureMode::Lotus, "tick {k}");
    }
    c.tick(15.0 / 60.0, FRAME_DT, &input);
    let status = c.status();
    assert!(status.is_tracking);
    assert_eq!(status.confirmed, GestureMode::Shield);
    assert_eq!(status.label(), "Shield Formation");
    assert_eq!(c.engine().mode(), GestureMode::Shield);
}

#[test]
fn losing_the_hand_idles_but_keeps_the_target() {
    let mut c = controller(30);
    let input = hand(FIST, Vec2::new(0.3, 0.4));
    for k in 0..20 {
        c.tick(k as f64 / 60.0, FRAME_DT, &input);
    }
    let held = c.target_position();
    assert!(c.tracking().is_tracking);

    c.tick(20.0 / 60.0, FRAME_DT, &HandInput::Absent);
    assert!(!c.status().is_tracking);
    assert_eq!(c.target_position(), held);
    assert_eq!(c.status().confirmed, GestureMode::Shield);
    assert_eq!(c.status().label(), "Waiting for Gesture...");
    assert_eq!(c.engine().mode(), GestureMode::Lotus);
    assert!(!c.snapshot().is_tracking);
}

#[test]
fn dragon_records_motion_and_extends_on_stale_frames() {
    let mut c = controller(30);
    let mut k = 0u32;
    while k < 40 {
        let wrist = Vec2::new(0.3 + k as f32 * 0.01, 0.6);
        c.tick(k as f64 / 60.0, FRAME_DT, &hand(SWORD, wrist));
        k += 1;
    }
    assert_eq!(c.status().confirmed, GestureMode::Dragon);
    let path = c.engine().path();
    assert_eq!(path.latest(), c.target_position());
    let dir = path.last_direction();
    assert!(dir.length() > 0.99);

    let before = path.latest();
    c.tick(k as f64 / 60.0, FRAME_DT, &HandInput::Unchanged);
    let after = c.engine().path().latest();
    assert!((after - (before + dir * 0.3)).length() < 1e-4);
    // the tracked target itself does not move without a new frame
    assert_eq!(c.target_position(), before);
}

#[test]
fn stale_frames_without_tracking_leave_the_trail_alone() {
    let mut c = controller(10);
    let before: Vec<Vec3> = c.engine().path().iter().collect();
    for k in 0..10 {
        c.tick(k as f64 / 60.0, FRAME_DT, &HandInput::Unchanged);
    }
    let after: Vec<Vec3> = c.engine().path().iter().collect();
    assert_eq!(before, after);
    assert!(!c.status().is_tracking);
}
