//! End-to-end conversion from STL bytes to blocks.

use std::collections::HashSet;

use config::conversion::ConversionConfig;
use glam::{DVec3, IVec3};
use stlvox_mesh::parse_bytes;
use stlvox_raster::{convert, deliver, BlockAccumulator, NullReporter, Triangle};

const UNIT_ASCII: &str = "solid unit
facet normal 0 0 1
outer loop
vertex 0 0 0
vertex 1 0 0
vertex 0 1 0
endloop
endfacet
endsolid unit
";

fn binary_stl(triangles: &[[[f32; 3]; 3]]) -> Vec<u8> {
    let mut bytes = vec![0u8; 80];
    bytes.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for triangle in triangles {
        for value in [0.0f32, 0.0, 1.0] {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        for vertex in triangle {
            for value in vertex {
                bytes.extend_from_slice(&value.to_le_bytes());
            }
        }
        bytes.extend_from_slice(&0u16.to_le_bytes());
    }
    bytes
}

fn identity() -> ConversionConfig {
    ConversionConfig::new([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]).unwrap()
}

fn unit_blocks() -> HashSet<IVec3> {
    [IVec3::new(0, 0, 0), IVec3::new(1, 0, 0), IVec3::new(0, 1, 0)]
        .into_iter()
        .collect()
}

#[test]
fn ascii_unit_triangle_yields_its_corners() {
    let mesh = parse_bytes(UNIT_ASCII.as_bytes()).unwrap();
    let conversion = convert(&mesh, &identity(), &NullReporter);

    assert_eq!(conversion.triangle_count(), 1);
    assert_eq!(conversion.blocks(), &unit_blocks());
}

#[test]
fn binary_unit_triangle_matches_ascii() {
    let bytes = binary_stl(&[[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]]);
    let mesh = parse_bytes(&bytes).unwrap();
    let conversion = convert(&mesh, &identity(), &NullReporter);

    assert_eq!(conversion.triangle_count(), 1);
    assert_eq!(conversion.blocks(), &unit_blocks());
}

#[test]
fn origin_offsets_every_block() {
    let mesh = parse_bytes(UNIT_ASCII.as_bytes()).unwrap();
    let config =
        ConversionConfig::new([10.0, 64.0, -3.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0])
            .unwrap();
    let conversion = convert(&mesh, &config, &NullReporter);

    let expected: HashSet<IVec3> = unit_blocks()
        .into_iter()
        .map(|b| b + IVec3::new(10, 64, -3))
        .collect();
    assert_eq!(conversion.blocks(), &expected);
}

#[test]
fn bounds_cover_all_vertices_regardless_of_order() {
    let triangles = [
        [[0.0, 1.0, 2.0], [5.0, 5.0, 5.0], [-2.0, 0.0, 0.0]],
        [[1.0, 1.0, 1.0], [0.0, 0.0, 0.0], [3.0, 2.0, 1.0]],
    ];
    let mut reversed = triangles;
    reversed.reverse();

    for order in [triangles, reversed] {
        let mesh = parse_bytes(&binary_stl(&order)).unwrap();
        let conversion = convert(&mesh, &identity(), &NullReporter);
        assert_eq!(conversion.bounds().min(), Some(DVec3::new(-2.0, 0.0, 0.0)));
        assert_eq!(conversion.bounds().max(), Some(DVec3::new(5.0, 5.0, 5.0)));
    }
}

#[test]
fn parallel_and_sequential_agree() {
    let triangles: Vec<[[f32; 3]; 3]> = (0..200)
        .map(|i| {
            let t = i as f32 * 0.37;
            [
                [t, 0.0, -t],
                [t + 7.5, 3.25, 1.0],
                [-t, 9.0, t * 0.5],
            ]
        })
        .collect();
    let mesh = parse_bytes(&binary_stl(&triangles)).unwrap();

    let sequential = convert(&mesh, &ConversionConfig::default(), &NullReporter);
    let parallel = convert(
        &mesh,
        &ConversionConfig::default().with_parallel(true),
        &NullReporter,
    );

    assert_eq!(sequential.blocks(), parallel.blocks());
    assert_eq!(sequential.bounds(), parallel.bounds());
    assert_eq!(sequential.summary(), parallel.summary());
}

#[test]
fn shared_edges_are_delivered_once() {
    let triangles = [
        [[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 4.0, 0.0]],
        [[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, -4.0, 0.0]],
    ];
    let mesh = parse_bytes(&binary_stl(&triangles)).unwrap();
    let conversion = convert(&mesh, &identity(), &NullReporter);

    let mut delivered: Vec<IVec3> = Vec::new();
    let count = deliver(conversion.accumulator(), &mut delivered, &NullReporter).unwrap();

    assert_eq!(count, 25);
    let unique: HashSet<IVec3> = delivered.iter().copied().collect();
    assert_eq!(unique.len(), delivered.len());
}

#[test]
fn accumulating_directly_matches_convert() {
    let mesh = parse_bytes(UNIT_ASCII.as_bytes()).unwrap();
    let conversion = convert(&mesh, &identity(), &NullReporter);

    let mut manual = BlockAccumulator::new();
    manual.add_triangle(&Triangle::new(
        DVec3::ZERO,
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
    ));
    assert_eq!(manual.blocks(), conversion.blocks());
    assert_eq!(manual.bounds(), conversion.bounds());
}
