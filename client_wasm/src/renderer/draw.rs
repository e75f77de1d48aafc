use game_core::{Color, Frame, PongState};
use wgpu::*;

use super::resources::InstanceData;
use super::Renderer;
use crate::camera::CameraUniform;
use crate::error::{ClientError, ClientResult};

const CLEAR: Color = Color([0.02, 0.02, 0.06, 1.0]);
const FIELD_TINT: [f32; 4] = [0.0, 0.0, 0.0, 0.2];
const IDLE_OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.8];
const FIELD_RADIUS: f32 = 10.0;
const PADDLE_RADIUS: f32 = 8.0;

pub fn draw_frame(renderer: &mut Renderer, frame: &Frame) -> ClientResult<()> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| ClientError::Frame(format!("{:?}", e)))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());

    let instances = build_instances(frame);
    update_buffers(renderer, frame, &instances);

    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });
    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(wgpu::Color {
                        r: CLEAR.0[0] as f64,
                        g: CLEAR.0[1] as f64,
                        b: CLEAR.0[2] as f64,
                        a: CLEAR.0[3] as f64,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, instances.len() as u32);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();
    Ok(())
}

fn update_buffers(renderer: &mut Renderer, frame: &Frame, instances: &[InstanceData]) {
    renderer.camera.resize(frame.field.width, frame.field.height);
    renderer.camera.shake = frame.shake_offset;
    let uniform = CameraUniform::from_camera(&renderer.camera);
    renderer
        .queue
        .write_buffer(&renderer.buffers.camera, 0, bytemuck::cast_slice(&[uniform]));

    renderer.buffers.reserve(&renderer.device, instances.len());
    renderer
        .queue
        .write_buffer(&renderer.buffers.instances, 0, bytemuck::cast_slice(instances));
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>, count: u32) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
    pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..renderer.quad.index_count, 0, 0..count);
}

/// Back-to-front instance list for one frame
pub fn build_instances(frame: &Frame) -> Vec<InstanceData> {
    let mut instances = Vec::with_capacity(frame.particles.len() + 6);

    instances.push(InstanceData::new(
        [0.0, 0.0, frame.field.width, frame.field.height],
        FIELD_TINT,
        FIELD_RADIUS,
    ));

    for particle in &frame.particles {
        instances.push(InstanceData::new(
            [particle.pos.x, particle.pos.y, particle.size, particle.size],
            particle.color.0,
            particle.size / 2.0,
        ));
    }

    if let Some(power_up) = frame.power_up {
        instances.push(InstanceData::new(
            [power_up.pos.x, power_up.pos.y, power_up.size.x, power_up.size.y],
            Color::POWER_UP.0,
            power_up.size.x / 2.0,
        ));
    }

    if let Some(ball) = frame.ball {
        instances.push(InstanceData::new(
            [ball.pos.x, ball.pos.y, ball.size.x, ball.size.y],
            Color::BALL.0,
            ball.size.x / 2.0,
        ));
    }

    for paddle in &frame.paddles {
        let color = if paddle.highlighted {
            lighten(paddle.color, 0.5)
        } else {
            paddle.color
        };
        instances.push(InstanceData::new(
            [
                paddle.rect.pos.x,
                paddle.rect.pos.y,
                paddle.rect.size.x,
                paddle.rect.size.y,
            ],
            color.0,
            PADDLE_RADIUS,
        ));
    }

    if frame.state == PongState::Idle {
        instances.push(InstanceData::new(
            [0.0, 0.0, frame.field.width, frame.field.height],
            IDLE_OVERLAY,
            FIELD_RADIUS,
        ));
    }

    instances
}

fn lighten(color: Color, amount: f32) -> Color {
    let [r, g, b, a] = color.0;
    Color([
        r + (1.0 - r) * amount,
        g + (1.0 - g) * amount,
        b + (1.0 - b) * amount,
        a,
    ])
}
