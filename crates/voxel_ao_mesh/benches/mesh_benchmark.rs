//! Benchmark for chunk meshing.
//!
//! Run with: cargo bench --package voxel_ao_mesh --bench mesh_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use voxel_ao_mesh::{ChunkMesher, VoxelVolume};

fn checkerboard(n: usize) -> VoxelVolume {
    let mut volume = VoxelVolume::cube(n).unwrap();
    for y in 0..n as i32 {
        for z in 0..n as i32 {
            for x in 0..n as i32 {
                if (x + y + z) % 2 == 0 {
                    volume.set(x, y, z, [200, 120, 40]).unwrap();
                }
            }
        }
    }
    volume
}

fn hills(n: usize) -> VoxelVolume {
    let mut volume = VoxelVolume::cube(n).unwrap();
    for z in 0..n as i32 {
        for x in 0..n as i32 {
            let h = (n as i32 / 2) + ((x * 7 + z * 3) % 5) - 2;
            for y in 0..h.max(1) {
                volume.set(x, y, z, [90, 160, 60]).unwrap();
            }
        }
    }
    volume
}

fn benchmark_reference_chunk(c: &mut Criterion) {
    let mesher = ChunkMesher::new();
    let volume = hills(16);

    c.bench_function("mesh_16_hills", |b| {
        b.iter(|| black_box(mesher.build_mesh(black_box(&volume))));
    });
}

fn benchmark_worst_case(c: &mut Criterion) {
    let mesher = ChunkMesher::new();
    let mut group = c.benchmark_group("worst_case");

    for n in [16usize, 32] {
        let volume = checkerboard(n);
        group.throughput(Throughput::Elements((n * n * n) as u64));
        group.bench_function(format!("checkerboard_{n}"), |b| {
            b.iter(|| black_box(mesher.build_mesh(black_box(&volume))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_reference_chunk, benchmark_worst_case);
criterion_main!(benches);
