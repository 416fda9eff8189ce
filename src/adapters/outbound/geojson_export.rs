use crate::domains::path_planning::path::Path;
use crate::domains::path_planning::roadmap::RoadmapSnapshot;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use serde_json::json;

fn feature(geometry: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn props(pairs: &[(&str, serde_json::Value)]) -> JsonObject {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Roadmap nodes as `Point` features and edges as two-point `LineString` features.
pub fn roadmap_to_geojson(snapshot: &RoadmapSnapshot) -> FeatureCollection {
    let mut features = Vec::with_capacity(snapshot.node_count() + snapshot.edge_count());
    for node in &snapshot.nodes {
        features.push(feature(
            Value::Point(vec![node.pose.x, node.pose.y]),
            props(&[
                ("kind", json!("node")),
                ("id", json!(node.id.to_string())),
                ("yaw", json!(node.pose.yaw)),
            ]),
        ));
    }
    for (a, b) in &snapshot.edges {
        if let (Some(na), Some(nb)) = (snapshot.node(a), snapshot.node(b)) {
            features.push(feature(
                Value::LineString(vec![vec![na.pose.x, na.pose.y], vec![nb.pose.x, nb.pose.y]]),
                props(&[
                    ("kind", json!("edge")),
                    ("weight", json!(na.pose.distance_to(&nb.pose))),
                ]),
            ));
        }
    }
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// A planned path as a single `LineString` feature; empty paths give an empty collection.
pub fn path_to_geojson(path: &Path) -> FeatureCollection {
    let features = if path.is_empty() {
        Vec::new()
    } else {
        vec![feature(
            Value::LineString(path.poses.iter().map(|p| vec![p.x, p.y]).collect()),
            props(&[
                ("kind", json!("path")),
                ("length", json!(path.length())),
            ]),
        )]
    };
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

pub fn to_geojson_string(collection: FeatureCollection) -> String {
    GeoJson::from(collection).to_string()
}
