pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::error::ClientResult;
use crate::mesh::Mesh;
use game_core::Frame;
use resources::GameBuffers;
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub quad: Mesh,
}

impl Renderer {
    pub async fn new(canvas: web_sys::HtmlCanvasElement, field: (f32, f32)) -> ClientResult<Self> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::orthographic(field.0, field.1);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);
        let quad = Mesh::quad(&ctx.device, &ctx.queue);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            quad,
        })
    }

    /// Reconfigure the surface for a new backing-store size
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width, height) == self.size {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, frame: &Frame) -> ClientResult<()> {
        draw::draw_frame(self, frame)
    }
}
