// Hand-off from the boot loader.
// The Multiboot loader jumps to `_start` in 32-bit protected mode with
// interrupts off and no stack we can rely on, so `_start` sets one up before
// entering Rust.
use core::arch::global_asm;

use kernel_lib::multiboot::{MultibootHeader, HEADER};

const STACK_SIZE: usize = 16 * 1024;

#[used]
#[link_section = ".multiboot"]
static MULTIBOOT_HEADER: MultibootHeader = HEADER;

global_asm!(
    ".section .bss.boot_stack, \"aw\", @nobits",
    ".balign 16",
    "boot_stack_bottom:",
    ".skip {stack_size}",
    "boot_stack_top:",
    "",
    ".section .text._start, \"ax\"",
    ".global _start",
    "_start:",
    "    mov esp, offset boot_stack_top",
    "    cld",
    "    call {kernel_main}",
    // kernel_main never returns. If it somehow does, spin here.
    "2:",
    "    jmp 2b",
    stack_size = const STACK_SIZE,
    kernel_main = sym crate::kernel_main,
);
