use dotmatrix_common::error::Error;

use crate::{
    devices::buffer::BufferDevice,
    gb::{GameBoy, GameBoyMode},
    ppu::FRAME_BUFFER_SIZE,
};

#[derive(Default)]
pub struct TestOptions {
    pub mode: Option<GameBoyMode>,
    pub ppu_enabled: Option<bool>,
    pub apu_enabled: Option<bool>,
    pub dma_enabled: Option<bool>,
    pub timer_enabled: Option<bool>,
    pub boot: Option<bool>,
}

pub fn build_test(options: TestOptions) -> Box<GameBoy> {
    let device = Box::<BufferDevice>::default();
    let mut game_boy = Box::new(GameBoy::new(options.mode));
    game_boy.set_ppu_enabled(options.ppu_enabled.unwrap_or(true));
    game_boy.set_apu_enabled(options.apu_enabled.unwrap_or(true));
    game_boy.set_dma_enabled(options.dma_enabled.unwrap_or(true));
    game_boy.set_timer_enabled(options.timer_enabled.unwrap_or(true));
    game_boy.attach_serial(device);
    game_boy.load(options.boot.unwrap_or(true)).unwrap();
    game_boy
}

pub fn run_test(
    rom_path: &str,
    max_cycles: Option<u64>,
    options: TestOptions,
) -> Result<Box<GameBoy>, Error> {
    let max_cycles = max_cycles.unwrap_or(u64::MAX);
    let mut game_boy = build_test(options);
    game_boy.load_rom_file(rom_path, None)?;
    game_boy.clocks_cycles(max_cycles as usize);
    Ok(game_boy)
}

pub fn run_step_test(
    rom_path: &str,
    addr: u16,
    options: TestOptions,
) -> Result<Box<GameBoy>, Error> {
    let mut game_boy = build_test(options);
    game_boy.load_rom_file(rom_path, None)?;
    game_boy.step_to(addr);
    Ok(game_boy)
}

pub fn run_serial_test(
    rom_path: &str,
    max_cycles: Option<u64>,
    options: TestOptions,
) -> Result<(String, Box<GameBoy>), Error> {
    let mut game_boy = run_test(rom_path, max_cycles, options)?;
    Ok((game_boy.serial().device().state(), game_boy))
}

pub fn run_image_test(
    rom_path: &str,
    max_cycles: Option<u64>,
    options: TestOptions,
) -> Result<([u8; FRAME_BUFFER_SIZE], Box<GameBoy>), Error> {
    let mut game_boy = run_test(rom_path, max_cycles, options)?;
    Ok((*game_boy.frame_buffer(), game_boy))
}

#[cfg(test)]
mod tests {
    use crate::{
        consts::{
            BGP_ADDR, DIV_ADDR, DMA_ADDR, IF_ADDR, LCDC_ADDR, LYC_ADDR, LY_ADDR, OBP0_ADDR,
            OBP1_ADDR, SCX_ADDR, SCY_ADDR, STAT_ADDR, TAC_ADDR, TIMA_ADDR, TMA_ADDR, WX_ADDR,
            WY_ADDR,
        },
        gb::GameBoyMode,
        rom::{RamSize, RomType, RomSize},
    };

    use super::{build_test, TestOptions};

    #[test]
    fn test_boot_state_post_boot_registers() {
        let game_boy = build_test(TestOptions {
            mode: Some(GameBoyMode::Dmg),
            boot: Some(true),
            ..Default::default()
        });

        assert_eq!(game_boy.mmu().read(DIV_ADDR), 0xcf);
        assert_eq!(game_boy.mmu().read(TIMA_ADDR), 0x00);
        assert_eq!(game_boy.mmu().read(TMA_ADDR), 0x00);
        assert_eq!(game_boy.mmu().read(TAC_ADDR), 0xf8);
        assert_eq!(game_boy.mmu().read(IF_ADDR), 0xe1);

        assert_eq!(game_boy.ppu().read(LCDC_ADDR), 0x91);
        assert_eq!(game_boy.ppu().read(STAT_ADDR), 0x81);
        assert_eq!(game_boy.ppu().read(SCY_ADDR), 0x00);
        assert_eq!(game_boy.ppu().read(SCX_ADDR), 0x00);
        assert_eq!(game_boy.ppu().read(LY_ADDR), 0x99);
        assert_eq!(game_boy.ppu().read(LYC_ADDR), 0x00);
        assert_eq!(game_boy.ppu().read(BGP_ADDR), 0xfc);
        assert_eq!(game_boy.ppu().read(OBP0_ADDR), 0x00);
        assert_eq!(game_boy.ppu().read(OBP1_ADDR), 0x00);
        assert_eq!(game_boy.ppu().read(WX_ADDR), 0x00);
        assert_eq!(game_boy.ppu().read(WY_ADDR), 0x00);

        assert_eq!(game_boy.ppu().read(DMA_ADDR), 0xff);
    }

    #[test]
    fn test_load_rom_empty_defaults_to_rom_only() {
        let mut game_boy = build_test(TestOptions::default());
        game_boy.load_rom_empty().unwrap();
        assert_eq!(game_boy.rom_i().gb_mode(), GameBoyMode::Dmg);
        assert_eq!(game_boy.rom_i().rom_type(), RomType::RomOnly);
        assert_eq!(game_boy.rom_i().rom_size(), RomSize::Size32K);
        assert_eq!(game_boy.rom_i().ram_size(), RamSize::NoRam);
    }
}
