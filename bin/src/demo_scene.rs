//! Built-in demo scene

use crate::app::*;
use lights::*;
use materials::*;
use pbr::geometry::*;
use pbr::light::*;
use pbr::material::*;
use pbr::pbrt::*;
use pbr::primitive::*;
use pbr::primitives::*;
use pbr::scene::*;
use pbr::spectrum::*;
use shapes::*;
use std::sync::Arc;

/// Radiance of rays that leave the scene.
const BACKGROUND: Float = 0.05;

/// Validates the graph, loads its tabulated data and wraps it for sharing.
///
/// * `graph` - The material nodes.
/// * `root`  - Root BxDF node.
fn node_material(graph: MaterialGraph, root: NodeId) -> ArcMaterial {
    let mut material = NodeMaterial::new(graph, root);
    material.post_process();
    Arc::new(material)
}

/// Checkerboard of two greys.
fn floor_material() -> ArcMaterial {
    let mut graph = MaterialGraph::new();
    let checker = graph.add(TextureNode::checker(
        Input::color(Spectrum::new(0.8)),
        Input::color(Spectrum::new(0.2)),
        Input::scalar(8.0),
    ));
    let root = graph.add(BxdfNode::lambert(checker.into()));
    node_material(graph, root)
}

/// Measured BRDF when given, otherwise rough diffuse under a copper coat.
///
/// * `merl_file` - Optional MERL BRDF file.
fn left_material(merl_file: Option<&str>) -> ArcMaterial {
    let mut graph = MaterialGraph::new();
    if let Some(path) = merl_file {
        let root = graph.add(BxdfNode::merl(path));
        return node_material(graph, root);
    }

    let diffuse = graph.add(BxdfNode::oren_nayar(
        Input::color(Spectrum::from_rgb([0.8, 0.3, 0.2])),
        Input::scalar(0.3),
    ));
    let coat = graph.add(BxdfNode::microfacet_reflection(
        Input::color(Spectrum::ONE),
        Input::scalar(0.2),
        Input::color(Spectrum::from_rgb([0.2, 0.92, 1.1])),
        Input::color(Spectrum::from_rgb([3.9, 2.45, 2.14])),
    ));
    let diffuse_weight = graph.add(NodeValue::Scalar(0.7));
    let coat_weight = graph.add(NodeValue::Scalar(0.3));
    let root = graph.add(LayeredNode::new(&[
        (diffuse, diffuse_weight.into()),
        (coat, coat_weight.into()),
    ]));
    node_material(graph, root)
}

/// Tabulated BSDF when given, otherwise a glossy surface whose colour blends
/// with the surface parametrization over a rough dielectric.
///
/// * `fourier_file` - Optional Fourier BSDF file.
fn right_material(fourier_file: Option<&str>) -> ArcMaterial {
    let mut graph = MaterialGraph::new();
    if let Some(path) = fourier_file {
        let root = graph.add(BxdfNode::fourier(path));
        return node_material(graph, root);
    }

    let uv = graph.add(TextureNode::Uv);
    let color = graph.add(OperatorNode::Blend {
        a: Input::color(Spectrum::from_rgb([0.2, 0.4, 0.8])),
        b: uv.into(),
        factor: Input::scalar(0.3),
    });
    let gloss = graph.add(BxdfNode::MicrofacetReflection {
        base_color: color.into(),
        distribution: String::from("Beckmann"),
        visibility: String::from("Smith"),
        roughness: Input::scalar(0.35),
        eta: Input::scalar(1.5),
        k: Input::scalar(0.0),
    });
    let glass = graph.add(BxdfNode::microfacet_refraction(
        Input::color(Spectrum::ONE),
        Input::scalar(0.2),
        Input::scalar(1.5),
        Input::scalar(1.0),
    ));
    let diffuse = graph.add(BxdfNode::lambert(color.into()));
    let root = graph.add(LayeredNode::new(&[
        (gloss, Input::scalar(0.4)),
        (glass, Input::scalar(0.2)),
        (diffuse, Input::scalar(0.4)),
    ]));
    node_material(graph, root)
}

/// Returns a primitive made of `shape` and `material`.
///
/// * `shape`    - The shape.
/// * `material` - The material.
fn primitive(shape: ArcShape, material: ArcMaterial) -> ArcPrimitive {
    Arc::new(GeometricPrimitive::new(shape, Some(material), None))
}

/// Builds a floor with two spheres lit by a point light and a distant light.
/// A disk shaped area light is visible above them.
///
/// * `options` - Application options.
pub fn build(options: &Options) -> Scene {
    let mut primitives: Vec<ArcPrimitive> = vec![
        primitive(
            Arc::new(Disk::new(
                Point3f::new(0.0, 0.0, 0.0),
                Normal3f::new(0.0, 0.0, 1.0),
                20.0,
            )),
            floor_material(),
        ),
        primitive(
            Arc::new(Sphere::new(Point3f::new(-1.2, 0.0, 1.0), 1.0)),
            left_material(options.merl_file.as_deref()),
        ),
        primitive(
            Arc::new(Sphere::new(Point3f::new(1.2, 0.0, 1.0), 1.0)),
            right_material(options.fourier_file.as_deref()),
        ),
    ];

    let emitter_shape: ArcShape = Arc::new(Disk::new(
        Point3f::new(0.0, 2.0, 4.0),
        Normal3f::new(0.0, -0.5, -1.0),
        0.75,
    ));
    let emitter = Arc::new(DiffuseAreaLight::new(
        Arc::clone(&emitter_shape),
        Spectrum::new(4.0),
    ));
    let area_light: ArcAreaLight = emitter.clone();
    primitives.push(Arc::new(GeometricPrimitive::new(
        emitter_shape,
        None,
        Some(area_light),
    )));

    let point: ArcLight = Arc::new(PointLight::new(
        Point3f::new(2.0, -3.0, 5.0),
        Spectrum::new(30.0),
    ));
    let sun: ArcLight = Arc::new(DistantLight::new(
        Spectrum::from_rgb([0.4, 0.4, 0.5]),
        Vector3f::new(-0.3, -0.5, 1.0),
        25.0,
    ));
    let emitter: ArcLight = emitter;
    let lights: Vec<ArcLight> = vec![point, sun, emitter];

    Scene::new(
        Arc::new(PrimitiveList::new(primitives)),
        lights,
        Spectrum::new(BACKGROUND),
    )
}
