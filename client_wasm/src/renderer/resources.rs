use crate::camera::{Camera, CameraUniform};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub rect: [f32; 4],  // x, y, w, h in field pixels
    pub color: [f32; 4], // rgba
    pub shape: [f32; 4], // corner radius, unused x3
}

impl InstanceData {
    // rect, color, shape
    const ATTRIBUTES: [VertexAttribute; 3] =
        vertex_attr_array![1 => Float32x4, 2 => Float32x4, 3 => Float32x4];

    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as BufferAddress,
            step_mode: VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }

    pub fn new(rect: [f32; 4], color: [f32; 4], radius: f32) -> Self {
        Self {
            rect,
            color,
            shape: [radius, 0.0, 0.0, 0.0],
        }
    }
}

/// Instances allocated up front; the buffer doubles when a frame needs more
pub const INITIAL_INSTANCE_CAPACITY: usize = 256;

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
    pub instance_capacity: usize,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        instances: create_instance_buffer(device, INITIAL_INSTANCE_CAPACITY),
        instance_capacity: INITIAL_INSTANCE_CAPACITY,
    }
}

pub fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl GameBuffers {
    /// Make room for `count` instances, reallocating if needed
    pub fn reserve(&mut self, device: &Device, count: usize) {
        if count <= self.instance_capacity {
            return;
        }
        let mut capacity = self.instance_capacity.max(1);
        while capacity < count {
            capacity *= 2;
        }
        log::debug!("Growing instance buffer to {}", capacity);
        self.instances = create_instance_buffer(device, capacity);
        self.instance_capacity = capacity;
    }
}
