mod raster_files;
mod text_files;
