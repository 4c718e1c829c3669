mod gallery_flow;
mod gate_flow;
