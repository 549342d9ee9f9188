use itertools::iproduct;
use lymburn::core::forcefield::cutoff::CutoffMode;
use lymburn::core::models::simulation_box::SimulationBox;
use lymburn::core::models::system::ParticleSystem;
use lymburn::engine::config::PotentialConfigBuilder;
use lymburn::engine::tasks::force_pass::Execution;
use lymburn::workflows::evaluate;
use nalgebra::{Point3, Vector3};

const DISTANCES: [f64; 5] = [0.1, 0.5, 1.0, 2.0, 5.0];
const R_CUTS: [f64; 2] = [1.0, 2.0];
const STRENGTHS: [f64; 2] = [2.0, 0.01];
const BOX_SIZES: [f64; 2] = [10.0, 20.0];
const DECIMAL_6: f64 = 1.5e-6;

fn wrap(mut v: Vector3<f64>, box_size: f64) -> Vector3<f64> {
    for k in 0..3 {
        if v[k] > 0.5 * box_size {
            v[k] -= box_size;
        } else if v[k] < -0.5 * box_size {
            v[k] += box_size;
        }
    }
    v
}

/// Force on `pos_a` from `pos_b`, written independently of the library.
fn reference_pair_force(
    pos_a: &Point3<f64>,
    pos_b: &Point3<f64>,
    r_cut: f64,
    strength: f64,
    box_size: f64,
) -> Vector3<f64> {
    let r = wrap(pos_b - pos_a, box_size);
    let r_abs = r.norm();
    if r_abs > r_cut {
        return Vector3::zeros();
    }
    -r * strength / (r_abs * r_abs)
}

fn reference_forces(
    positions: &[Point3<f64>],
    r_cut: f64,
    strength: f64,
    box_size: f64,
) -> Vec<Vector3<f64>> {
    let mut forces = vec![Vector3::zeros(); positions.len()];
    for i in 0..positions.len() {
        for j in 0..i {
            let f = reference_pair_force(&positions[i], &positions[j], r_cut, strength, box_size);
            forces[i] += f;
            forces[j] -= f;
        }
    }
    forces
}

fn build_system(box_size: f64, positions: &[Point3<f64>]) -> ParticleSystem {
    let mut system = ParticleSystem::new(SimulationBox::cubic(box_size).unwrap());
    for &position in positions {
        system.add_particle("A", position);
    }
    system
}

fn assert_forces_match(actual: &[Vector3<f64>], expected: &[Vector3<f64>], context: &str) {
    assert_eq!(actual.len(), expected.len());
    for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
        for k in 0..3 {
            assert!(
                (a[k] - e[k]).abs() < DECIMAL_6,
                "{context}: particle {index} component {k}: got {}, expected {}",
                a[k],
                e[k]
            );
        }
    }
}

#[test]
fn two_particle_forces_match_reference_grid() {
    for (distance, r_cut, strength, box_size) in
        iproduct!(DISTANCES, R_CUTS, STRENGTHS, BOX_SIZES)
    {
        let positions = [
            Point3::new(-0.5 * distance, 0.0, 0.1),
            Point3::new(0.5 * distance, 0.0, 0.1),
        ];
        let system = build_system(box_size, &positions);
        let config = PotentialConfigBuilder::new()
            .r_cut(r_cut)
            .mode(CutoffMode::None)
            .strength("A", "A", strength)
            .build()
            .unwrap();

        let report = evaluate::run(&system, &config, Execution::Serial).unwrap();
        let expected = reference_forces(&positions, r_cut, strength, box_size);
        let context = format!("d={distance} r_cut={r_cut} strength={strength} box={box_size}");
        assert_forces_match(&report.forces, &expected, &context);

        let expected_energy = if distance <= r_cut {
            -strength * distance.ln()
        } else {
            0.0
        };
        assert!(
            (report.total_energy() - expected_energy).abs() < DECIMAL_6,
            "{context}: energy {} vs {}",
            report.total_energy(),
            expected_energy
        );
    }
}

#[test]
fn pair_across_the_periodic_boundary_matches_reference() {
    let box_size = 10.0;
    let positions = [
        Point3::new(4.8, 0.0, 0.0),
        Point3::new(-4.7, 0.0, 0.0),
    ];
    let system = build_system(box_size, &positions);
    let config = PotentialConfigBuilder::new()
        .r_cut(1.0)
        .strength("A", "A", 2.0)
        .build()
        .unwrap();

    let report = evaluate::run(&system, &config, Execution::Serial).unwrap();
    assert_eq!(report.num_pairs, 1);
    // the image of particle 1 sits to the right of particle 0
    assert!(report.forces[0].x < 0.0);
    assert_forces_match(
        &report.forces,
        &reference_forces(&positions, 1.0, 2.0, box_size),
        "periodic pair",
    );
}

#[test]
fn many_body_forces_match_reference_and_sum_to_zero() {
    let box_size = 6.0;
    let mut positions = Vec::new();
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        (seed >> 11) as f64 / (1u64 << 53) as f64
    };
    for _ in 0..40 {
        positions.push(Point3::new(
            (next() - 0.5) * box_size,
            (next() - 0.5) * box_size,
            (next() - 0.5) * box_size,
        ));
    }
    let system = build_system(box_size, &positions);
    let config = PotentialConfigBuilder::new()
        .r_cut(2.0)
        .strength("A", "A", 0.5)
        .build()
        .unwrap();

    let expected = reference_forces(&positions, 2.0, 0.5, box_size);
    for execution in [Execution::Serial, Execution::preferred()] {
        let report = evaluate::run(&system, &config, execution).unwrap();
        assert_forces_match(&report.forces, &expected, "many-body");
        assert!(report.net_force().norm() < 1e-9);
    }
}
