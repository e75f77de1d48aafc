//! WGSL sources

/// Instanced rounded rectangles. A corner radius of half the shorter side
/// turns the quad into a circle.
pub const FIELD_SHADER: &str = r#"
struct Camera {
    view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

struct VertexInput {
    @location(0) position: vec2<f32>,
};

struct InstanceInput {
    @location(1) rect: vec4<f32>,   // x, y, w, h
    @location(2) color: vec4<f32>,
    @location(3) shape: vec4<f32>,  // x: corner radius in pixels
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) local: vec2<f32>,
    @location(1) half_size: vec2<f32>,
    @location(2) color: vec4<f32>,
    @location(3) radius: f32,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let world = instance.rect.xy + vertex.position * instance.rect.zw;
    var out: VertexOutput;
    out.clip_position = camera.view_proj * vec4<f32>(world, 0.0, 1.0);
    out.half_size = instance.rect.zw * 0.5;
    out.local = (vertex.position - vec2<f32>(0.5, 0.5)) * instance.rect.zw;
    out.color = instance.color;
    out.radius = min(instance.shape.x, min(out.half_size.x, out.half_size.y));
    return out;
}

fn rounded_box(p: vec2<f32>, half_size: vec2<f32>, radius: f32) -> f32 {
    let q = abs(p) - half_size + vec2<f32>(radius, radius);
    return length(max(q, vec2<f32>(0.0, 0.0))) + min(max(q.x, q.y), 0.0) - radius;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let d = rounded_box(in.local, in.half_size, in.radius);
    let coverage = clamp(0.5 - d, 0.0, 1.0);
    if (coverage <= 0.0) {
        discard;
    }
    return vec4<f32>(in.color.rgb, in.color.a * coverage);
}
"#;
