#![no_std]
#![no_main]

mod boot;

use core::panic::PanicInfo;

use kernel_lib::{ColorCode, Overflow, Renderer, VgaBuffer, GREETING};

#[no_mangle]
pub extern "C" fn kernel_main() -> ! {
    // SAFETY: the boot loader leaves paging off, so 0xB8000 is the VGA text
    // buffer, and nothing else runs while we write to it.
    let vga = unsafe { VgaBuffer::new() };

    let mut renderer = Renderer::new(GREETING, vga, ColorCode::DEFAULT, Overflow::Truncate);
    renderer.render();
    renderer.idle()
}

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    loop {}
}
