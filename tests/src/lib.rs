mod environment;
mod frame;
mod ggx;
mod scenario;
mod specular;
