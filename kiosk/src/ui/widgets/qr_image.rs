//! QR code picture widget backed by in-memory PNG bytes.

use gtk4 as gtk;
use gtk4::prelude::*;

/// Build a Picture showing the rendered QR code.
pub fn qr_picture(png: &[u8], size: i32) -> gtk::Picture {
    let picture = gtk::Picture::new();
    picture.set_size_request(size, size);
    picture.set_hexpand(false);
    picture.set_vexpand(false);
    picture.add_css_class("qr-image");

    let gbytes = glib::Bytes::from(png);
    let stream = gtk::gio::MemoryInputStream::from_bytes(&gbytes);
    match gtk::gdk_pixbuf::Pixbuf::from_stream(&stream, None::<&gtk::gio::Cancellable>) {
        Ok(pixbuf) => {
            let texture = gtk::gdk::Texture::for_pixbuf(&pixbuf);
            picture.set_paintable(Some(&texture));
        }
        Err(e) => {
            log::error!("Failed to decode QR image: {}", e);
        }
    }

    picture
}
